//! Shared backend constructor for all platforms.
//!
//! The configuration is fixed at build time, so every screen builds the same
//! [`api::HttpUserService`].

use directory::ClientConfig;

pub fn client_config() -> ClientConfig {
    ClientConfig::default()
}

/// Create the HTTP-backed user service.
pub fn make_service() -> api::HttpUserService {
    api::HttpUserService::new(&client_config())
}
