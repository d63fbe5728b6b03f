//! Authentication module
//!
//! Freshservice authenticates API calls with HTTP Basic auth, using the
//! agent's API key as the user name and any placeholder as the password.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
