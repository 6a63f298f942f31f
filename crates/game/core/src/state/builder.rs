//! Text layouts for building initial states.
//!
//! Legend: `#` wall, `.` floor, `@` player, `o` orc, `T` troll,
//! `!` healing potion, `?` scroll. Every non-wall glyph sits on floor.

use super::{
    ActorState, ActorStats, EntitiesState, EntityId, GameState, ItemState, Position,
    ResourceMeter, TerrainKind, TileMap,
};

/// Errors raised while parsing a text layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("layout has no player start")]
    MissingPlayer,

    #[error("second player start at {0}")]
    DuplicatePlayer(Position),

    #[error("unknown glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },
}

impl GameState {
    /// Parses a rectangular text layout into a fresh state.
    pub fn from_layout(rows: &[&str]) -> Result<Self, LayoutError> {
        let width = rows.first().map(|row| row.chars().count()).ok_or(LayoutError::Empty)?;
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut map = TileMap::new(width as u32, rows.len() as u32, TerrainKind::Floor);
        let mut player: Option<ActorState> = None;
        let mut npcs = Vec::new();
        let mut items = Vec::new();
        let mut next_id = 1u32;
        let mut allocate = || {
            let id = EntityId(next_id);
            next_id += 1;
            id
        };

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                match glyph {
                    '.' => {}
                    '#' => map.set_terrain(position, TerrainKind::Wall),
                    '@' => {
                        if player.is_some() {
                            return Err(LayoutError::DuplicatePlayer(position));
                        }
                        player = Some(ActorState::new(
                            EntityId::PLAYER,
                            "Player",
                            position,
                            ActorStats::new(ResourceMeter::full(30), 5, 2),
                        ));
                    }
                    'o' => npcs.push(ActorState::new(
                        allocate(),
                        "Orc",
                        position,
                        ActorStats::new(ResourceMeter::full(10), 3, 0),
                    )),
                    'T' => npcs.push(ActorState::new(
                        allocate(),
                        "Troll",
                        position,
                        ActorStats::new(ResourceMeter::full(16), 4, 1),
                    )),
                    '!' => items.push(ItemState::new(allocate(), "Healing Potion", position)),
                    '?' => items.push(ItemState::new(allocate(), "Lightning Scroll", position)),
                    other => {
                        return Err(LayoutError::UnknownGlyph {
                            glyph: other,
                            position,
                        });
                    }
                }
            }
        }

        let player = player.ok_or(LayoutError::MissingPlayer)?;
        Ok(GameState::new(EntitiesState::new(player, npcs, items), map))
    }
}
