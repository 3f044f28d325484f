//! Wire DTOs for the auth service boundary.
//!
//! DESIGN
//! ======
//! Both auth endpoints accept the same credential body; failures are only
//! assumed to carry a human-readable `message`. Keeping the shapes in one
//! place keeps the request code schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The transient credential pair collected by the auth form.
///
/// Lives only in page state for the duration of a visit; cleared after a
/// successful submission and never persisted by this client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Address the user signs in with.
    pub email: String,
    /// Plain-text password, sent only in the JSON body of the two auth
    /// endpoints.
    pub password: String,
}

/// Failure body returned by the auth endpoints.
///
/// Anything in the body besides `message` is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable reason, surfaced verbatim in the error alert when
    /// present.
    #[serde(default)]
    pub message: Option<String>,
}
