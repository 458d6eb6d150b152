//! Combat resolver: collisions with map and actors, attack connection, cooldowns.
//!
//! Чистые функции над компонентами одного/двух акторов; ECS системы
//! находятся в `combat::systems` и только раскладывают query по этим функциям.

use bevy::prelude::*;

use super::config::CombatConfig;
use super::cooldown::CombatCooldowns;
use super::hitbox::{body_hitbox, tile_hitbox, weapon_hitbox};
use crate::action::ActionMachine;
use crate::actor::ActorKind;
use crate::map::SpatialMap;
use crate::stats::{compute_damage, StatBlock};

/// Мутабельный view на компоненты актора для resolve_attack
pub struct Combatant<'a> {
    pub kind: ActorKind,
    pub machine: &'a mut ActionMachine,
    pub stats: &'a mut StatBlock,
    pub cooldowns: &'a mut CombatCooldowns,
}

/// Прерванный dodge: выход из Dodge + отскок против facing
fn bounce(machine: &mut ActionMachine, config: &CombatConfig) {
    machine.cancel_dodge();
    let away = -machine.facing().sign() * config.bounce_distance;
    machine.nudge(Vec2::new(away, 0.0));
}

/// Пересекает ли тело в `candidate` хоть одну стену.
///
/// При столкновении во время dodge — bounce (true в обоих случаях).
pub fn check_environment_collision(
    machine: &mut ActionMachine,
    candidate: Vec2,
    map: &impl SpatialMap,
    config: &CombatConfig,
) -> bool {
    let tile_size = map.tile_size() as i32 * config.scale;
    if tile_size <= 0 || map.width() == 0 || map.height() == 0 {
        return false;
    }

    let body = body_hitbox(candidate, config);
    let last_column = map.width() as i32 - 1;
    let last_row = map.height() as i32 - 1;

    let first_i = body.x.div_euclid(tile_size).clamp(0, last_column);
    let last_i = (body.x + body.width - 1).div_euclid(tile_size).clamp(0, last_column);
    let first_j = body.y.div_euclid(tile_size).clamp(0, last_row);
    let last_j = (body.y + body.height - 1).div_euclid(tile_size).clamp(0, last_row);

    let mut collided = false;
    'scan: for i in first_i..=last_i {
        for j in first_j..=last_j {
            if map.is_wall(i, j) && body.intersects(&tile_hitbox(i, j, tile_size)) {
                collided = true;
                break 'scan;
            }
        }
    }

    if collided && machine.is_dodging() {
        bounce(machine, config);
    }
    collided
}

/// Пересекаются ли тела A (в `pos_a`) и B (в `pos_b`).
///
/// Если A в dodge — bounce для A.
pub fn check_actor_collision(a: &mut ActionMachine, pos_a: Vec2, pos_b: Vec2, config: &CombatConfig) -> bool {
    let collided = body_hitbox(pos_a, config).intersects(&body_hitbox(pos_b, config));
    if collided && a.is_dodging() {
        bounce(a, config);
    }
    collided
}

/// Условия попадания (без побочных эффектов)
pub fn attack_connects(
    aggressor_kind: ActorKind,
    aggressor: &ActionMachine,
    defender: &ActionMachine,
    config: &CombatConfig,
) -> bool {
    if !aggressor.is_attacking() {
        return false;
    }
    if defender.is_damage_reacting()
        || defender.is_blocking()
        || defender.is_dodging()
        || defender.is_attacking()
    {
        return false;
    }

    match weapon_hitbox(aggressor, aggressor_kind, config) {
        Some(weapon) => weapon.intersects(&body_hitbox(defender.position(), config)),
        None => false,
    }
}

/// Попытка атаки aggressor → defender.
///
/// При попадании: damage reaction у defender, урон через zero-floored take_damage,
/// attack cooldown у aggressor, damage cooldown у defender.
/// Возвращает фактически снятое здоровье.
pub fn resolve_attack(
    aggressor: &mut Combatant<'_>,
    defender: &mut Combatant<'_>,
    config: &CombatConfig,
) -> Option<i32> {
    if !attack_connects(aggressor.kind, &*aggressor.machine, &*defender.machine, config) {
        return None;
    }

    defender.machine.take_damage_reaction();

    let before = defender.stats.health().get();
    let damage = compute_damage(aggressor.stats.attack(), defender.stats.defence());
    defender.stats.take_damage(damage);

    aggressor.cooldowns.attack.arm();
    defender.cooldowns.damage.arm();

    Some(before - defender.stats.health().get())
}

/// Тик cooldowns актора (заморожен при hitstun)
pub fn tick_cooldowns(machine: &mut ActionMachine, cooldowns: &mut CombatCooldowns, config: &CombatConfig) {
    if cooldowns.is_hitstunned() {
        return;
    }

    if cooldowns.attack.tick(config.attack_cooldown_ticks) {
        machine.end_attack();
    }
    if cooldowns.damage.tick(config.damage_cooldown_ticks) {
        machine.clear_damage_reaction();
    }
}
