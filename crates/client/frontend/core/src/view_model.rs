//! View-model snapshots derived from [`game_core::GameState`].
//!
//! Frontends render from these snapshots instead of walking the state
//! directly, and style them through a [`PresentationMapper`].
use game_core::{ActorState, EntityId, GameState, Position, TerrainKind};

use crate::message::MessageLevel;

/// Framework-agnostic styling hooks implemented by each frontend's theme.
pub trait PresentationMapper {
    type Style;

    fn render_actor(&self, actor: &ActorView) -> (char, Self::Style);

    fn render_item(&self, name: &str) -> (char, Self::Style);

    /// `visible` is false for tiles that are explored but out of sight.
    fn render_terrain(&self, terrain: TerrainKind, visible: bool) -> (char, Self::Style);

    fn style_message(&self, level: MessageLevel) -> Self::Style;

    fn style_health(&self, current: u32, maximum: u32) -> Self::Style;
}

/// 2D map view, top row first.
#[derive(Clone, Debug)]
pub struct MapView {
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<Vec<TileView>>,
}

impl MapView {
    pub fn from_state(state: &GameState) -> Self {
        let map = &state.map;
        let tiles = (0..map.height() as i32)
            .map(|y| {
                (0..map.width() as i32)
                    .map(|x| TileView::from_state(state, Position::new(x, y)))
                    .collect()
            })
            .collect();

        Self {
            width: map.width(),
            height: map.height(),
            tiles,
        }
    }

    pub fn tile(&self, position: Position) -> Option<&TileView> {
        if position.x < 0 || position.y < 0 {
            return None;
        }
        self.tiles
            .get(position.y as usize)?
            .get(position.x as usize)
    }
}

/// Single tile in the map view. Unexplored tiles carry no terrain.
#[derive(Clone, Debug)]
pub struct TileView {
    pub position: Position,
    pub terrain: Option<TerrainKind>,
    pub visible: bool,
    pub content: TileContent,
}

/// Topmost visible thing standing on a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileContent {
    Empty,
    Item(String),
    Actor(ActorView),
}

impl TileView {
    fn from_state(state: &GameState, position: Position) -> Self {
        let map = &state.map;
        let visible = map.is_visible(position);
        let terrain = map
            .is_explored(position)
            .then(|| map.terrain(position))
            .flatten();

        let content = if visible {
            top_content(state, position)
        } else {
            TileContent::Empty
        };

        Self {
            position,
            terrain,
            visible,
            content,
        }
    }
}

/// Living actors draw above corpses, corpses above items.
fn top_content(state: &GameState, position: Position) -> TileContent {
    let entities = &state.entities;
    let mut actors: Vec<&ActorState> = entities
        .all_actors()
        .filter(|actor| actor.position == position)
        .collect();
    actors.sort_by_key(|actor| actor.is_alive());

    if let Some(actor) = actors.last() {
        if actor.is_alive() {
            return TileContent::Actor(ActorView::from_actor(actor));
        }
    }
    if let Some(item) = entities.items_at(position).next() {
        return TileContent::Item(item.name.clone());
    }
    match actors.last() {
        Some(corpse) => TileContent::Actor(ActorView::from_actor(corpse)),
        None => TileContent::Empty,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorView {
    pub id: EntityId,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub alive: bool,
}

impl ActorView {
    pub fn from_actor(actor: &ActorState) -> Self {
        Self {
            id: actor.id,
            name: actor.name.clone(),
            health: actor.stats.health.current,
            max_health: actor.stats.health.maximum,
            alive: actor.is_alive(),
        }
    }

    pub fn is_player(&self) -> bool {
        self.id.is_player()
    }
}

/// Player summary for status bars.
#[derive(Clone, Debug)]
pub struct PlayerView {
    pub actor: ActorView,
    pub position: Position,
    pub inventory: Vec<String>,
}

impl PlayerView {
    pub fn from_state(state: &GameState) -> Self {
        let player = state.player();
        Self {
            actor: ActorView::from_actor(player),
            position: player.position,
            inventory: player
                .inventory
                .items
                .iter()
                .map(|item| item.name.clone())
                .collect(),
        }
    }
}
