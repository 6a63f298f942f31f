//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Name of the per-run log directory. Generated from the clock when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 7, min: 3)
    /// - `HISTORY_MARGIN` - Inset of the message history overlay in cells (default: 3)
    /// - `DUNGEON_SESSION_ID` - Log directory name for this run
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(UiConfig::MIN_MESSAGE_PANEL_HEIGHT);
        }

        if let Some(margin) = read_env::<u16>("HISTORY_MARGIN") {
            config.ui.history_margin = margin;
        }

        config.session_id = env::var("DUNGEON_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including its title row).
    pub message_panel_height: u16,
    /// Cells between the screen edge and the history overlay frame.
    pub history_margin: u16,
}

impl UiConfig {
    pub const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 7,
            history_margin: 3,
        }
    }
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
    fn defaults() {
        let config = CliConfig::default();
        assert_eq!(config.ui.message_panel_height, 7);
        assert_eq!(config.ui.history_margin, 3);
        assert!(config.session_id.is_none());
    }
}
