//! Login and password-recovery actions. These run without a session.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::submit;
use crate::api::{ApiTransport, Endpoint, Envelope};
use crate::forms::validate::{Checks, FormError};
use crate::guard::{HOME_PATH, PublicRouteMatch, RouteClass, classify};

pub const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// FORMS
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    #[serde(default, rename = "callbackUrl", alias = "callback_url")]
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResetPasswordForm {
    pub token: String,
    pub password: String,
    #[serde(alias = "confirmPassword", skip_serializing)]
    pub confirm_password: String,
}

fn check_email(checks: &mut Checks, email: &str) {
    checks.required("email", email, 254);
    if !email.trim().is_empty() && !email.contains('@') {
        checks.fail("email", "must be an email address");
    }
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut checks = Checks::new();
        check_email(&mut checks, &self.email);
        if self.password.is_empty() {
            checks.fail("password", "is required");
        }
        checks.finish()
    }
}

impl ForgotPasswordForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut checks = Checks::new();
        check_email(&mut checks, &self.email);
        checks.finish()
    }
}

impl ResetPasswordForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut checks = Checks::new();
        checks.required("token", &self.token, 512);
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            checks.fail("password", format!("must be at least {MIN_PASSWORD_LEN} characters"));
        }
        if self.password != self.confirm_password {
            checks.fail("confirm_password", "does not match password");
        }
        checks.finish()
    }
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Tokens issued by the API on login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub access_token: String,
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
}

/// What the UI gets back from a successful login.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    pub redirect_to: String,
    pub user: Option<Value>,
}

/// Tokens to store in cookies after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[derive(Debug)]
pub struct Login {
    pub envelope: Envelope<LoginOutcome>,
    pub session: Option<IssuedSession>,
}

impl Login {
    fn rejected(envelope: Envelope<LoginOutcome>) -> Self {
        Self { envelope, session: None }
    }
}

pub async fn login(api: &dyn ApiTransport, form: LoginForm, mode: PublicRouteMatch) -> Login {
    if let Err(err) = form.validate() {
        return Login::rejected(err.into_envelope());
    }

    let credentials = Credentials { email: form.email.trim(), password: &form.password };
    let envelope: Envelope<LoginResponse> = submit(api, None, Endpoint::AuthLogin, &credentials).await;
    let message = envelope.message().map(str::to_owned);
    let Some(response) = envelope.into_data() else {
        return Login::rejected(Envelope::failure(message.unwrap_or_else(|| "Login failed".to_owned())));
    };
    if response.access_token.is_empty() {
        return Login::rejected(Envelope::failure("Login failed"));
    }

    let outcome =
        LoginOutcome { redirect_to: safe_redirect(form.callback_url.as_deref(), mode), user: response.user };
    let mut envelope = Envelope::ok(outcome);
    if let Some(message) = message {
        envelope = envelope.with_message(message);
    }
    Login {
        envelope,
        session: Some(IssuedSession { access_token: response.access_token, refresh_token: response.refresh_token }),
    }
}

/// Where to send the user after login. Only same-origin protected pages are
/// honoured; anything else goes home.
#[must_use]
pub fn safe_redirect(callback: Option<&str>, mode: PublicRouteMatch) -> String {
    let Some(path) = callback.map(str::trim) else {
        return HOME_PATH.to_owned();
    };
    let same_origin = path.starts_with('/') && !path.starts_with("//") && !path.contains('\\');
    if same_origin && classify(path, mode) == RouteClass::Protected {
        path.to_owned()
    } else {
        HOME_PATH.to_owned()
    }
}

// =============================================================================
// PASSWORD RECOVERY
// =============================================================================

pub async fn forgot_password(api: &dyn ApiTransport, form: ForgotPasswordForm) -> Envelope<Value> {
    if let Err(err) = form.validate() {
        return err.into_envelope();
    }
    submit(api, None, Endpoint::AuthForgotPassword, &form).await
}

pub async fn reset_password(api: &dyn ApiTransport, form: ResetPasswordForm) -> Envelope<Value> {
    if let Err(err) = form.validate() {
        return err.into_envelope();
    }
    submit(api, None, Endpoint::AuthResetPassword, &form).await
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
