//! Combat system module
//!
//! ECS ответственность:
//! - Hitbox геометрия (body / weapon / tile), пересчёт на каждый запрос
//! - Movement pass: plan → veto (стены, акторы) → commit
//! - Resolve атак игрок ↔ монстры, damage formula через StatBlock
//! - Per-actor cooldowns (attack / damage), смерть и награды
//! - Events: AttackLanded, ActorDied

use bevy::prelude::*;

pub mod config;
pub mod cooldown;
pub mod events;
pub mod hitbox;
pub mod resolver;
pub mod systems;


// Re-export основных типов
pub use config::CombatConfig;
pub use cooldown::{CombatCooldowns, TickCooldown};
pub use events::{ActorDied, AttackLanded};
pub use hitbox::{body_hitbox, tile_hitbox, weapon_hitbox, Hitbox};
pub use resolver::{
    attack_connects, check_actor_collision, check_environment_collision, resolve_attack, tick_cooldowns, Combatant,
};

use crate::SimulationSet;

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate.
///
/// Порядок выполнения (по SimulationSet):
/// 1. Animation: advance_clip_playback — тик клипов
/// 2. Movement: apply_movement — plan + collision veto + commit
/// 3. Combat: resolve_attacks → tick_combat_cooldowns
/// 4. Cleanup: handle_deaths — ActorDied, despawn монстров, Dead у игрока
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<AttackLanded>().add_event::<ActorDied>();

        app.init_resource::<CombatConfig>()
            .init_resource::<crate::map::GridMap>();

        app.add_systems(
            FixedUpdate,
            (
                systems::advance_clip_playback.in_set(SimulationSet::Animation),
                systems::apply_movement.in_set(SimulationSet::Movement),
                (systems::resolve_attacks, systems::tick_combat_cooldowns)
                    .chain()
                    .in_set(SimulationSet::Combat),
                systems::handle_deaths.in_set(SimulationSet::Cleanup),
            ),
        );
    }
}
