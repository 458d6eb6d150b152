//! FSM AI system: state transitions, movement intent, attack decision.

use bevy::prelude::*;
use rand::Rng;

use crate::action::{ActionMachine, MoveIntent};
use crate::actor::Dead;
use crate::ai::{AIConfig, AIState, Attacker};
use crate::player::Player;
use crate::DeterministicRng;

/// Система: AI монстров
///
/// Для каждого монстра:
/// 1. Выбор состояния по дистанции до ближайшего живого игрока
/// 2. Wander → случайное смещение, Chase → к цели,
///    Engage → стоим + попытка атаки, затем тик attack таймера
///
/// Вся случайность из `DeterministicRng` (порядок query стабилен).
pub fn monster_ai(
    players: Query<(Entity, &ActionMachine), (With<Player>, Without<Dead>)>,
    mut monsters: Query<
        (
            Entity,
            &mut AIState,
            &AIConfig,
            &mut Attacker,
            &mut ActionMachine,
            &mut MoveIntent,
        ),
        (Without<Player>, Without<Dead>),
    >,
    mut rng: ResMut<DeterministicRng>,
) {
    for (entity, mut state, config, mut attacker, mut machine, mut intent) in monsters.iter_mut() {
        let position = machine.position();
        let nearest = players
            .iter()
            .map(|(target, target_machine)| (target, target_machine.position()))
            .min_by(|(_, a), (_, b)| position.distance(*a).total_cmp(&position.distance(*b)));

        let new_state = config.decide(nearest.map(|(target, at)| (target, position.distance(at))));
        if new_state.label() != state.label() {
            crate::log(&format!(
                "🧠 AI {:?}: {} → {}",
                entity,
                state.label(),
                new_state.label()
            ));
        }
        *state = new_state;

        match (&*state, nearest) {
            (AIState::Chase { .. }, Some((_, target_position))) => {
                intent.displacement = config.chase_displacement(position, target_position);
            }
            (AIState::Engage { .. }, Some((target, target_position))) => {
                intent.displacement = Vec2::ZERO;

                let in_radius = position.distance(target_position) <= config.attack_radius;
                if attacker.can_attack() && in_radius {
                    let roll = rng.rng.gen::<f32>() * 100.0;
                    if config.attack_roll_succeeds(roll) && machine.request_attack() {
                        attacker.start_attack();
                        crate::log(&format!("⚔️ AI {:?} attacks {:?}", entity, target));
                    }
                }
                // Таймер идёт только в Engage
                attacker.tick();
            }
            _ => {
                let r1 = rng.rng.gen::<f32>();
                let r2 = rng.rng.gen::<f32>();
                intent.displacement = config.wander_displacement(machine.buffered_movement(), r1, r2);
            }
        }
    }
}
