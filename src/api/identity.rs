//! Player identity resolution
//!
//! The core only ever sees an opaque [`PlayerId`]. Requests name their player
//! in the `X-Player-Id` header; requests without one share the guest identity.

use crate::game::PlayerId;
use axum::http::HeaderMap;

/// Header carrying the caller's player identity
pub const PLAYER_HEADER: &str = "x-player-id";

/// Maps inbound request headers to a stable player identifier
#[derive(Debug, Clone)]
pub struct PlayerResolver {
    guest: PlayerId,
}

impl PlayerResolver {
    #[must_use]
    pub fn new(guest: impl Into<String>) -> Self {
        Self {
            guest: PlayerId::new(guest),
        }
    }

    #[must_use]
    pub const fn guest(&self) -> &PlayerId {
        &self.guest
    }

    #[must_use]
    pub fn resolve(&self, headers: &HeaderMap) -> PlayerId {
        headers
            .get(PLAYER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(|| self.guest.clone(), PlayerId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn header_identifies_player() {
        let resolver = PlayerResolver::new("guest");
        let mut headers = HeaderMap::new();
        headers.insert(PLAYER_HEADER, HeaderValue::from_static(" alice "));

        assert_eq!(resolver.resolve(&headers), PlayerId::new("alice"));
    }

    #[test]
    fn missing_or_blank_header_is_guest() {
        let resolver = PlayerResolver::new("guest");
        assert_eq!(resolver.resolve(&HeaderMap::new()), PlayerId::new("guest"));

        let mut headers = HeaderMap::new();
        headers.insert(PLAYER_HEADER, HeaderValue::from_static("   "));
        assert_eq!(resolver.resolve(&headers), PlayerId::new("guest"));
    }
}
