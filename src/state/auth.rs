//! Auth form state: login/register mode and the last server rejection.
//!
//! DESIGN
//! ======
//! Mode-dependent copy and error lifecycle are methods on a plain struct,
//! keeping the page component down to wiring.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Which flavor of the auth form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Existing account: submit runs the login call only.
    #[default]
    Login,
    /// New account: submit runs signup first, then login.
    Register,
}

impl AuthMode {
    /// Whether submit must run the signup call before logging in.
    pub fn requires_signup(self) -> bool {
        matches!(self, Self::Register)
    }

    /// Label on the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// Copy on the mode-switch link under the form.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Register",
            Self::Register => "Have an account? Login",
        }
    }
}

/// Auth page state shared via context: current mode plus the message from
/// the last rejected call.
#[derive(Clone, Debug, Default)]
pub struct AuthFormState {
    pub mode: AuthMode,
    /// Shown in the error alert while set.
    pub error: Option<String>,
}

impl AuthFormState {
    /// Flip login <-> register and drop any stale server error.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.error = None;
    }

    /// Record a rejected call's message for the alert.
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Dismiss the alert.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
