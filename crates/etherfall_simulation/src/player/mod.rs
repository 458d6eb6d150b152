//! Player domain
//!
//! Содержит:
//! - Player (маркер), PlayerInput (кнопки от хоста), PlayerProgress (уровни)
//! - apply_player_input — edge triggers → ActionMachine requests

use bevy::prelude::*;

pub mod components;
pub mod input;

pub use components::*;
pub use input::*;

use crate::SimulationSet;

/// Player Plugin — input в фазе Intent
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, apply_player_input.in_set(SimulationSet::Intent));
    }
}
