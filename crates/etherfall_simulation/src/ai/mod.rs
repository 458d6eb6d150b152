//! AI decision-making module
//!
//! Simple FSM для монстров: Wander (случайное блуждание) → Chase → Engage (атака).
//! Решения пишутся в `MoveIntent` и requests `ActionMachine`; движение и
//! коллизии — общий movement pass в combat.

use bevy::prelude::*;

pub mod components;
pub mod systems;

// Re-export основных типов
pub use components::*;
pub use systems::*;

use crate::SimulationSet;

/// AI Plugin
///
/// Регистрирует monster_ai в FixedUpdate (фаза Intent, после player input).
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            monster_ai
                .in_set(SimulationSet::Intent)
                .after(crate::player::apply_player_input),
        );
    }
}
