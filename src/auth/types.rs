//! Auth configuration types

/// Password sent alongside an API key; the upstream ignores it
pub const API_KEY_PASSWORD: &str = "X";

/// Authentication configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },
}

impl AuthConfig {
    /// Basic auth carrying an API key as the user name
    pub fn api_key(token: impl Into<String>) -> Self {
        Self::Basic {
            username: token.into(),
            password: API_KEY_PASSWORD.to_string(),
        }
    }

    /// Whether no credentials are configured
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Basic { .. } => f
                .debug_struct("Basic")
                .field("username", &"***")
                .finish_non_exhaustive(),
        }
    }
}
