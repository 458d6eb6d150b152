//! Spawn bundles.

use bevy::prelude::*;
use rand::Rng;

use super::components::{Actor, ActorKind, Bounty};
use crate::ai::{AIConfig, AIState, Attacker};
use crate::player::{Player, PlayerInput, PlayerProgress};
use crate::stats::StatBlock;

pub fn player_bundle(position: Vec2) -> impl Bundle {
    let kind = ActorKind::Player;
    (
        Name::new(kind.label()),
        Actor::new(kind),
        Player,
        PlayerInput::default(),
        PlayerProgress::default(),
        kind.machine_at(position),
        kind.base_stats(),
    )
}

/// Монстр с AI; награда за убийство считается из статов на момент спавна
pub fn monster_bundle(kind: ActorKind, position: Vec2, stats: StatBlock) -> impl Bundle {
    let bounty = Bounty {
        experience: stats.experience_reward(),
    };
    (
        Name::new(kind.label()),
        Actor::new(kind),
        kind.machine_at(position),
        stats,
        bounty,
        AIState::default(),
        AIConfig::default(),
        Attacker::default(),
    )
}

/// Dragon — zone band, остальные монстры — базовые статы
pub fn monster_stats(kind: ActorKind, zone: u32, player_level: u32, rng: &mut impl Rng) -> StatBlock {
    match kind {
        ActorKind::Dragon => StatBlock::for_zone(zone, player_level, rng),
        _ => kind.base_stats(),
    }
}
