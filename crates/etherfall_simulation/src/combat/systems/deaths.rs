//! Death handling.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::actor::{Actor, Bounty, Dead};
use crate::combat::{ActorDied, AttackLanded};
use crate::player::PlayerProgress;
use crate::stats::StatBlock;

/// Система: смерть акторов
///
/// 1. Killer = последний aggressor по AttackLanded этого тика
/// 2. ActorDied для каждого актора с health на нижней границе
/// 3. Опыт из Bounty → PlayerProgress убийцы
/// 4. Монстры деспавнятся, игрок получает маркер Dead
pub fn handle_deaths(
    mut commands: Commands,
    mut landed: EventReader<AttackLanded>,
    mut died: EventWriter<ActorDied>,
    actors: Query<(Entity, &Actor, &StatBlock, Option<&Bounty>), Without<Dead>>,
    mut progress: Query<&mut PlayerProgress>,
) {
    let mut last_aggressor: HashMap<Entity, Entity> = HashMap::new();
    for event in landed.read() {
        last_aggressor.insert(event.defender, event.aggressor);
    }

    for (entity, actor, stats, bounty) in actors.iter() {
        if !stats.is_dead() {
            continue;
        }

        let killer = last_aggressor.get(&entity).copied();
        died.write(ActorDied { entity, killer });

        if let (Some(killer), Some(bounty)) = (killer, bounty) {
            if let Ok(mut killer_progress) = progress.get_mut(killer) {
                let levels = killer_progress.gain_experience(bounty.experience);
                if levels > 0 {
                    crate::log_info(&format!(
                        "⭐ {:?} reached level {} (+{} upgrade points)",
                        killer, killer_progress.level, levels
                    ));
                }
            }
        }

        if actor.kind.is_player() {
            commands.entity(entity).insert(Dead);
            crate::log_info(&format!("☠️ Player {:?} died (killer: {:?})", entity, killer));
        } else {
            commands.entity(entity).despawn();
            crate::log_info(&format!(
                "💀 {} {:?} died (killer: {:?})",
                actor.kind.label(),
                entity,
                killer
            ));
        }
    }
}
