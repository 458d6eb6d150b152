//! Player input → ActionMachine requests + MoveIntent.

use bevy::prelude::*;

use super::components::{Player, PlayerInput};
use crate::action::{ActionMachine, MoveIntent};
use crate::actor::Dead;
use crate::stats::StatBlock;

/// Смещение за тик на единицу направления: `speed/10 + 0.5`
pub fn player_speed_factor(speed: f32) -> f32 {
    speed / 10.0 + 0.5
}

/// System: фронты кнопок → requests, направление → MoveIntent
///
/// Атака по нажатию игнорируется во время dodge/block (нажатие сгорает).
pub fn apply_player_input(
    mut players: Query<
        (&mut PlayerInput, &mut ActionMachine, &mut MoveIntent, &StatBlock),
        (With<Player>, Without<Dead>),
    >,
) {
    for (mut input, mut machine, mut intent, stats) in players.iter_mut() {
        let edges = input.edges();

        if edges.attack_pressed && !machine.is_dodging() && !machine.is_blocking() {
            machine.request_attack();
        }
        if edges.dodge_pressed {
            machine.request_dodge();
        }
        if edges.block_pressed {
            machine.request_block();
        }
        if edges.block_released {
            machine.cancel_block();
        }

        intent.displacement = input.direction * player_speed_factor(stats.speed());
    }
}
