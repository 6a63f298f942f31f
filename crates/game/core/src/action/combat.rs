use super::{ActionError, ActionEvent, ActionTransition};
use crate::state::{EntityId, GameState};

/// Melee attack against an adjacent actor.
///
/// Damage is `power - defense`, never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeleeAction {
    pub actor: EntityId,
    pub target: EntityId,
}

impl MeleeAction {
    pub fn new(actor: EntityId, target: EntityId) -> Self {
        Self { actor, target }
    }
}

impl ActionTransition for MeleeAction {
    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        let attacker = state
            .entities
            .actor(self.actor)
            .ok_or(ActionError::ActorNotFound(self.actor))?;
        let target = state
            .entities
            .actor(self.target)
            .ok_or(ActionError::ActorNotFound(self.target))?;

        if !target.is_alive() {
            return Err(ActionError::ActorDead(self.target));
        }
        if attacker.position.distance(target.position) > 1 {
            return Err(ActionError::Blocked);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        events: &mut Vec<ActionEvent>,
    ) -> Result<(), ActionError> {
        let (attacker_name, power) = state
            .entities
            .actor(self.actor)
            .map(|actor| (actor.name.clone(), actor.stats.power))
            .ok_or(ActionError::ActorNotFound(self.actor))?;

        let target = state
            .entities
            .actor_mut(self.target)
            .ok_or(ActionError::ActorNotFound(self.target))?;

        let damage = target.stats.health.drain(power.saturating_sub(target.stats.defense));
        events.push(ActionEvent::Attacked {
            attacker: attacker_name,
            target: target.name.clone(),
            damage,
        });

        if !target.is_alive() {
            events.push(ActionEvent::Died {
                name: target.name.clone(),
                is_player: target.id.is_player(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lethal_attack_reports_death() {
        let mut state = GameState::from_layout(&["@o"]).unwrap();
        let orc = state.entities.npcs[0].id;
        state.entities.npcs[0].stats.health.current = 2;

        let mut events = Vec::new();
        let action = MeleeAction::new(EntityId::PLAYER, orc);
        action.pre_validate(&state).unwrap();
        action.apply(&mut state, &mut events).unwrap();

        assert!(!state.entities.npcs[0].is_alive());
        assert!(matches!(
            events.as_slice(),
            [
                ActionEvent::Attacked { damage: 2, .. },
                ActionEvent::Died { is_player: false, .. }
            ]
        ));
    }

    #[test]
    fn corpses_cannot_be_attacked() {
        let mut state = GameState::from_layout(&["@o"]).unwrap();
        let orc = state.entities.npcs[0].id;
        state.entities.npcs[0].stats.health.current = 0;

        assert_eq!(
            MeleeAction::new(EntityId::PLAYER, orc).pre_validate(&state),
            Err(ActionError::ActorDead(orc))
        );
    }
}
