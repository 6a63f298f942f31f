use crate::action::Action;
use crate::state::EntityId;

use super::GameEngine;

/// Turn sequencing for non-player actors.
impl<'a> GameEngine<'a> {
    /// Living NPCs in their acting order.
    pub fn npc_turn_order(&self) -> Vec<EntityId> {
        self.state
            .entities
            .npcs
            .iter()
            .filter(|npc| npc.is_alive())
            .map(|npc| npc.id)
            .collect()
    }

    /// Gives every living NPC one turn. NPCs have no behaviour of their own
    /// and simply wait. Returns how many NPCs acted.
    pub fn run_npc_turns(&mut self) -> usize {
        let order = self.npc_turn_order();
        order
            .into_iter()
            .filter(|&npc| self.execute(&Action::wait(npc)).is_ok())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::engine::GameEngine;
    use crate::state::GameState;

    #[test]
    fn only_living_npcs_take_turns() {
        let mut state = GameState::from_layout(&["@oTo"]).unwrap();
        state.entities.npcs[1].stats.health.current = 0;
        let config = GameConfig::default();
        let mut engine = GameEngine::new(&mut state, &config);

        assert_eq!(engine.npc_turn_order().len(), 2);
        assert_eq!(engine.run_npc_turns(), 2);
    }
}
