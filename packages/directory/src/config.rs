//! # Client configuration
//!
//! The backend location is fixed when the app is compiled. Setting
//! `USERDIR_API_URL` in the build environment replaces the default; there is no
//! runtime override and no config file.
//!
//! | Field | Default |
//! |-------|---------|
//! | `base_url` | [`DEFAULT_BASE_URL`] or the build-time `USERDIR_API_URL` |
//! | `messaging_scheme` | `whatsapp://send` |

/// Used when `USERDIR_API_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api/users";

/// Messaging app URL scheme used by the export action.
pub const DEFAULT_MESSAGING_SCHEME: &str = "whatsapp://send";

/// Where the client talks to and which app receives exported lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base path of the users resource, e.g. `http://10.0.2.2:5000/api/users`.
    pub base_url: String,
    /// URL that the exported text is appended to as `?text=`.
    pub messaging_scheme: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("USERDIR_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            messaging_scheme: DEFAULT_MESSAGING_SCHEME.to_string(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend (tests use this).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The collection endpoint both calls hit: the base path with one trailing slash.
    pub fn users_endpoint(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_endpoint_has_single_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://host:5000/api/users");
        assert_eq!(config.users_endpoint(), "http://host:5000/api/users/");

        let config = config.with_base_url("http://host:5000/api/users//");
        assert_eq!(config.users_endpoint(), "http://host:5000/api/users/");
    }

    #[test]
    fn test_default_scheme() {
        assert_eq!(ClientConfig::default().messaging_scheme, "whatsapp://send");
    }
}
