//! Action domain.
//!
//! An [`Action`] is an intent (`actor` + [`ActionKind`]) built per input event
//! and executed once by [`crate::GameEngine::execute`]. Each concrete kind has
//! its own [`ActionTransition`] implementation:
//!
//! - `movement`: bump (resolves to move or melee) and plain moves
//! - `combat`: melee attacks
//! - `inventory`: pickup and drop
//!
//! Execution either succeeds with an [`ActionOutcome`] describing what
//! happened, or fails with a recoverable [`ActionError`].

pub mod combat;
pub mod error;
pub mod inventory;
pub mod movement;
pub mod transition;

pub use combat::MeleeAction;
pub use error::ActionError;
pub use inventory::{DropAction, InventorySlot, PickupAction};
pub use movement::{BumpAction, BumpTarget, MoveAction};
pub use transition::ActionTransition;

use crate::state::{EntityId, Offset, Position};

/// Describes a single intent issued by an entity for the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub actor: EntityId,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(actor: EntityId, kind: ActionKind) -> Self {
        Self { actor, kind }
    }

    pub fn bump(actor: EntityId, offset: Offset) -> Self {
        Self::new(actor, ActionKind::Bump(offset))
    }

    pub fn wait(actor: EntityId) -> Self {
        Self::new(actor, ActionKind::Wait)
    }

    pub fn pickup(actor: EntityId) -> Self {
        Self::new(actor, ActionKind::Pickup)
    }

    pub fn drop_item(actor: EntityId, slot: InventorySlot) -> Self {
        Self::new(actor, ActionKind::Drop(slot))
    }

    pub fn escape(actor: EntityId) -> Self {
        Self::new(actor, ActionKind::Escape)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// Step by `offset`, attacking whatever living actor stands there.
    Bump(Offset),
    Wait,
    Pickup,
    Drop(InventorySlot),
    /// Escape request. Has no world effect; its meaning is decided by the session.
    Escape,
}

/// Something observable that happened while an action was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionEvent {
    Moved {
        actor: EntityId,
        to: Position,
    },
    Attacked {
        attacker: String,
        target: String,
        damage: u32,
    },
    Died {
        name: String,
        is_player: bool,
    },
    PickedUp {
        item: String,
    },
    Dropped {
        item: String,
    },
}

/// Successful execution result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    pub events: Vec<ActionEvent>,
}

impl ActionOutcome {
    pub fn new(events: Vec<ActionEvent>) -> Self {
        Self { events }
    }
}
