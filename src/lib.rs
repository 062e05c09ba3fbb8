//! Backend for the HR time-and-attendance console.
//!
//! The console UI talks only to this server. Page requests pass through the
//! route guard; `/api` action requests are validated, forwarded to the
//! remote attendance API with the caller's session token, and answered with
//! a normalized envelope.

pub mod actions;
pub mod api;
pub mod config;
pub mod forms;
pub mod guard;
pub mod models;
pub mod routes;
pub mod session;
pub mod state;
