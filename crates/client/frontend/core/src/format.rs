//! Player-facing narration for action events.

use game_core::ActionEvent;

use crate::message::MessageLevel;

/// Formats one action event into a log line.
///
/// Returns `None` for events that are visually obvious on the map (movement).
/// Examples:
/// - "Player attacks Orc for 5 hit points."
/// - "Orc attacks Player but does no damage."
/// - "Orc is dead!"
pub fn format_event(event: &ActionEvent) -> Option<(String, MessageLevel)> {
    match event {
        ActionEvent::Moved { .. } => None,
        ActionEvent::Attacked {
            attacker,
            target,
            damage,
        } => {
            let level = if target == "Player" {
                MessageLevel::Danger
            } else {
                MessageLevel::Attack
            };
            let text = if *damage > 0 {
                format!("{attacker} attacks {target} for {damage} hit points.")
            } else {
                format!("{attacker} attacks {target} but does no damage.")
            };
            Some((text, level))
        }
        ActionEvent::Died { is_player: true, .. } => {
            Some(("You died!".to_string(), MessageLevel::Danger))
        }
        ActionEvent::Died { name, .. } => Some((format!("{name} is dead!"), MessageLevel::Attack)),
        ActionEvent::PickedUp { item } => {
            Some((format!("You picked up the {item}!"), MessageLevel::Info))
        }
        ActionEvent::Dropped { item } => {
            Some((format!("You dropped the {item}."), MessageLevel::Info))
        }
    }
}
