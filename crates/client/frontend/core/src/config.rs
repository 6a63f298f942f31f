//! Frontend configuration structures and loaders.
//!
//! This module contains session and UI settings that are shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

use game_core::GameConfig;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub session: SessionConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, session: SessionConfig) -> Self {
        Self { messages, session }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 256)
    /// - `FOV_RADIUS` - Player sight radius in tiles (default: 8)
    /// - `ESCAPE_POLICY` - What the escape action does: `quit` or `ignore` (default: quit)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(radius) = read_env::<u32>("FOV_RADIUS") {
            config.session.game.fov_radius = radius;
        }

        if let Some(policy) = read_env::<EscapePolicy>("ESCAPE_POLICY") {
            config.session.escape_policy = policy;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    pub game: GameConfig,
    pub escape_policy: EscapePolicy,
}

/// Effect of the escape action performed from normal play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EscapePolicy {
    /// Request application exit.
    #[default]
    Quit,
    /// Consume the turn without further effect.
    Ignore,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_policy_parses_case_insensitively() {
        assert_eq!("quit".parse::<EscapePolicy>(), Ok(EscapePolicy::Quit));
        assert_eq!("IGNORE".parse::<EscapePolicy>(), Ok(EscapePolicy::Ignore));
        assert!("menu".parse::<EscapePolicy>().is_err());
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = FrontendConfig::default();
        assert_eq!(config.messages.capacity, 256);
        assert_eq!(config.session.game.fov_radius, GameConfig::DEFAULT_FOV_RADIUS);
        assert_eq!(config.session.escape_policy, EscapePolicy::Quit);
    }
}
