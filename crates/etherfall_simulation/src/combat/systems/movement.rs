//! Clip playback and movement pass with collision veto.

use bevy::prelude::*;

use crate::action::{ActionMachine, MoveIntent};
use crate::actor::{Actor, Dead};
use crate::combat::{check_actor_collision, check_environment_collision, CombatConfig};
use crate::map::GridMap;

/// Система: тик клипов всех живых акторов
pub fn advance_clip_playback(mut machines: Query<&mut ActionMachine, (With<Actor>, Without<Dead>)>) {
    for mut machine in machines.iter_mut() {
        machine.advance_playback();
    }
}

/// Система: movement pass
///
/// 1. Snapshot позиций всех живых акторов (по Entity index)
/// 2. Для каждого: plan → стены → остальные акторы
/// 3. Commit только если ничего не блокирует; snapshot обновляется сразу,
///    следующие акторы видят уже сдвинутую позицию
pub fn apply_movement(
    mut actors: Query<(Entity, &mut ActionMachine, &MoveIntent), (With<Actor>, Without<Dead>)>,
    map: Res<GridMap>,
    config: Res<CombatConfig>,
) {
    let mut positions: Vec<(Entity, Vec2)> = actors
        .iter()
        .map(|(entity, machine, _)| (entity, machine.position()))
        .collect();
    positions.sort_by_key(|(entity, _)| entity.index());

    for index in 0..positions.len() {
        let entity = positions[index].0;
        let Ok((_, mut machine, intent)) = actors.get_mut(entity) else {
            continue;
        };

        let candidate = machine.plan(intent.displacement);

        let mut blocked = check_environment_collision(&mut machine, candidate, &*map, &config);
        if !blocked {
            for (other, other_position) in positions.iter() {
                if *other == entity {
                    continue;
                }
                if check_actor_collision(&mut machine, candidate, *other_position, &config) {
                    blocked = true;
                    break;
                }
            }
        }

        if !blocked {
            machine.commit(candidate);
        }
        positions[index].1 = machine.position();
    }
}
