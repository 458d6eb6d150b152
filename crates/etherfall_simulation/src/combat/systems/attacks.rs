//! Attack resolution and cooldown ticking.

use bevy::prelude::*;

use crate::action::ActionMachine;
use crate::actor::{Actor, Dead};
use crate::combat::{resolve_attack, tick_cooldowns, AttackLanded, CombatConfig, CombatCooldowns, Combatant};
use crate::player::Player;
use crate::stats::StatBlock;

type FighterData = (
    Entity,
    &'static Actor,
    &'static mut ActionMachine,
    &'static mut StatBlock,
    &'static mut CombatCooldowns,
);

/// Система: resolve атак игрок ↔ монстры
///
/// Для каждой пары сначала монстр → игрок, затем игрок → монстр.
/// Монстры друг друга не бьют.
pub fn resolve_attacks(
    mut players: Query<FighterData, (With<Player>, Without<Dead>)>,
    mut monsters: Query<FighterData, (Without<Player>, Without<Dead>)>,
    config: Res<CombatConfig>,
    mut landed: EventWriter<AttackLanded>,
) {
    for (player_entity, player_actor, mut player_machine, mut player_stats, mut player_cooldowns) in players.iter_mut() {
        for (monster_entity, monster_actor, mut monster_machine, mut monster_stats, mut monster_cooldowns) in
            monsters.iter_mut()
        {
            if player_stats.is_dead() || monster_stats.is_dead() {
                continue;
            }

            let mut player = Combatant {
                kind: player_actor.kind,
                machine: &mut *player_machine,
                stats: &mut *player_stats,
                cooldowns: &mut *player_cooldowns,
            };
            let mut monster = Combatant {
                kind: monster_actor.kind,
                machine: &mut *monster_machine,
                stats: &mut *monster_stats,
                cooldowns: &mut *monster_cooldowns,
            };

            if let Some(damage) = resolve_attack(&mut monster, &mut player, &config) {
                crate::log(&format!(
                    "💥 {} {:?} hit player {:?} for {} (hp {})",
                    monster_actor.kind.label(),
                    monster_entity,
                    player_entity,
                    damage,
                    player.stats.health().get()
                ));
                landed.write(AttackLanded {
                    aggressor: monster_entity,
                    defender: player_entity,
                    damage,
                });
            }

            if let Some(damage) = resolve_attack(&mut player, &mut monster, &config) {
                crate::log(&format!(
                    "🗡️ player {:?} hit {} {:?} for {} (hp {})",
                    player_entity,
                    monster_actor.kind.label(),
                    monster_entity,
                    damage,
                    monster.stats.health().get()
                ));
                landed.write(AttackLanded {
                    aggressor: player_entity,
                    defender: monster_entity,
                    damage,
                });
            }
        }
    }
}

/// Система: тик attack/damage cooldowns
pub fn tick_combat_cooldowns(
    mut actors: Query<(&mut ActionMachine, &mut CombatCooldowns), (With<Actor>, Without<Dead>)>,
    config: Res<CombatConfig>,
) {
    for (mut machine, mut cooldowns) in actors.iter_mut() {
        tick_cooldowns(&mut machine, &mut cooldowns, &config);
    }
}
