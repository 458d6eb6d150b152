//! Etherfall Simulation Core
//!
//! ECS-симуляция боя и передвижения на Bevy 0.16 (headless).
//!
//! Каждый тик FixedUpdate (60Hz):
//! - Animation: клипы продвигаются на один тик
//! - Intent: player input / monster AI → requests + MoveIntent
//! - Movement: ActionMachine::plan → collision veto → commit
//! - Combat: resolve атак, cooldowns
//! - Cleanup: смерть, награды
//!
//! Рендер, камера, HUD, загрузка карт и ввод с клавиатуры — на стороне хоста.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod action;
pub mod actor;
pub mod ai;
pub mod animation;
pub mod combat;
pub mod logger;
pub mod map;
pub mod player;
pub mod stats;

// Re-export базовых типов для удобства
pub use action::{ActionMachine, ActionState, Facing, MoveIntent};
pub use actor::{monster_bundle, monster_stats, player_bundle, Actor, ActorKind, Bounty, Dead};
pub use ai::{AIConfig, AIPlugin, AIState, Attacker};
pub use animation::{AnimationClip, Clip, ClipLibrary, ClipPlayback, ClipSpec, VisualProfile};
pub use combat::{ActorDied, AttackLanded, CombatConfig, CombatCooldowns, CombatPlugin, Hitbox};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};
pub use map::{GridMap, MapError, SpatialMap};
pub use player::{Player, PlayerInput, PlayerPlugin, PlayerProgress};
pub use stats::{compute_damage, ScalarRange, StatAxis, StatBlock};

/// Частота simulation tick
pub const SIMULATION_HZ: u32 = 60;

/// Фазы тика (выполняются строго по порядку)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Animation,
    Intent,
    Movement,
    Combat,
    Cleanup,
}

/// Номер тика симуляции
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationTick(pub u64);

fn advance_tick(mut tick: ResMut<SimulationTick>) {
    tick.0 += 1;
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed по умолчанию, если хост не вставил свой
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ as f64))
            .init_resource::<SimulationTick>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Animation,
                    SimulationSet::Intent,
                    SimulationSet::Movement,
                    SimulationSet::Combat,
                    SimulationSet::Cleanup,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, advance_tick.before(SimulationSet::Animation))
            // Подсистемы
            .add_plugins((CombatPlugin, PlayerPlugin, AIPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ as f64));

    app
}

/// Прогнать ровно `ticks` тиков FixedUpdate (без зависимости от wall-clock)
pub fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Snapshot мира для сравнения детерминизма
/// (Debug-представление компонентов, отсортированное по Entity index)
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
