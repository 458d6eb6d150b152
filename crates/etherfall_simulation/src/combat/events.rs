//! Combat events.

use bevy::prelude::*;

/// Событие: атака попала
///
/// `damage` — фактически снятое здоровье (0 если defence перекрыла атаку).
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AttackLanded {
    pub aggressor: Entity,
    pub defender: Entity,
    pub damage: i32,
}

/// Событие: актор умер (health на нижней границе)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ActorDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}
