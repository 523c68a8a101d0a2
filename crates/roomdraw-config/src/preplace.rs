//! Preplacement endpoint settings.
//!
//! The preplacement importer can submit each (dorm, room) group to the
//! running room draw service so the service applies its own occupancy and
//! priority bookkeeping, instead of this tool writing occupant rows
//! directly.
//!
//! # Environment Variables
//!
//! - `PREPLACE_API_URL`: base URL of the service (default: `http://localhost:8080`)
//! - `ROOMDRAW_ADMIN_JWT`: admin bearer token passed through to the service

use std::env;

#[derive(Clone, Debug)]
pub struct PreplaceApiConfig {
    pub base_url: String,
    pub admin_jwt: String,
}

impl PreplaceApiConfig {
    /// Loads the endpoint configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("PREPLACE_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            admin_jwt: env::var("ROOMDRAW_ADMIN_JWT").unwrap_or_else(|_| "".to_string()),
        }
    }

    /// The preplace endpoint for one room.
    pub fn preplace_url(&self, room_uuid: impl std::fmt::Display) -> String {
        format!(
            "{}/rooms/preplace/{}",
            self.base_url.trim_end_matches('/'),
            room_uuid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preplace_url() {
        let config = PreplaceApiConfig {
            base_url: "http://localhost:8080/".to_string(),
            admin_jwt: String::new(),
        };
        assert_eq!(
            config.preplace_url("abc-123"),
            "http://localhost:8080/rooms/preplace/abc-123"
        );
    }
}
