//! Headless симуляция Etherfall
//!
//! Запускает дуэль игрок vs монстры без рендера на 1000 тиков

use bevy::prelude::*;
use rand::Rng;

use etherfall_simulation::{
    create_headless_app, log_info, monster_bundle, monster_stats, player_bundle, run_ticks, ActionMachine,
    ActorKind, DeterministicRng, GridMap, PlayerInput, SimulationPlugin, SpatialMap, StatBlock,
};

/// Арена 24×16 тайлов (768×512 при scale 2), стены по периметру и колонна в центре
const ARENA: [&str; 16] = [
    "########################",
    "#......................#",
    "#......................#",
    "#......................#",
    "#......................#",
    "#......................#",
    "#......................#",
    "#..........##..........#",
    "#..........##..........#",
    "#......................#",
    "#......................#",
    "#......................#",
    "#......................#",
    "#......................#",
    "#......................#",
    "########################",
];

fn main() {
    let seed = 42;
    println!("Starting Etherfall headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    match GridMap::from_rows(16, &ARENA) {
        Ok(map) => {
            log_info(&format!(
                "🗺️ Arena {}×{} ({} walls)",
                map.width(),
                map.height(),
                map.wall_count()
            ));
            app.insert_resource(map);
        }
        Err(error) => {
            eprintln!("Invalid arena: {}", error);
            return;
        }
    }

    let player = app.world_mut().spawn(player_bundle(Vec2::new(100.0, 240.0))).id();

    let spawns = [
        (ActorKind::Monster, Vec2::new(500.0, 300.0)),
        (ActorKind::Mage, Vec2::new(600.0, 100.0)),
        (ActorKind::Dragon, Vec2::new(600.0, 380.0)),
    ];
    for (kind, position) in spawns {
        let stats = {
            let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
            monster_stats(kind, 1, 1, &mut rng.rng)
        };
        app.world_mut().spawn(monster_bundle(kind, position, stats));
    }

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        script_player_input(&mut app, player, tick);
        run_ticks(&mut app, 1);

        if tick % 100 == 0 {
            let entity_count = app.world().entities().len();
            let health = app.world().get::<StatBlock>(player).map(|stats| stats.health().get());
            let position = app.world().get::<ActionMachine>(player).map(|machine| machine.position());
            println!(
                "Tick {}: {} entities, player hp {:?} at {:?}",
                tick, entity_count, health, position
            );
        }
    }

    println!("Simulation complete!");
}

/// Скриптованный ввод: идём вправо, атакуем каждые 30 тиков, иногда dodge / block
fn script_player_input(app: &mut App, player: Entity, tick: u32) {
    let jitter = {
        let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
        rng.rng.gen::<f32>() - 0.5
    };

    if let Some(mut input) = app.world_mut().get_mut::<PlayerInput>(player) {
        let phase = tick % 240;
        let direction = if phase < 120 {
            Vec2::new(1.0, jitter)
        } else {
            Vec2::new(-1.0, jitter)
        };

        input.press(
            direction,
            tick % 30 < 2,
            tick % 97 == 0,
            (150..170).contains(&phase),
        );
    }
}
