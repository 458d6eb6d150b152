//! Базовые компоненты акторов: Actor, ActorKind, Dead, Bounty

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::action::{ActionMachine, MoveIntent};
use crate::animation::{ClipLibrary, VisualProfile};
use crate::combat::CombatCooldowns;
use crate::stats::StatBlock;

/// Вид актора (спрайты, hitbox оружия, базовые статы)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Monster,
    Dragon,
    Mage,
    Firemonster,
}

impl ActorKind {
    pub fn is_player(&self) -> bool {
        matches!(self, ActorKind::Player)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActorKind::Player => "player",
            ActorKind::Monster => "monster",
            ActorKind::Dragon => "dragon",
            ActorKind::Mage => "mage",
            ActorKind::Firemonster => "firemonster",
        }
    }

    pub fn visual_profile(&self) -> VisualProfile {
        match self {
            ActorKind::Player => VisualProfile::player(),
            ActorKind::Mage | ActorKind::Firemonster => VisualProfile::caster(),
            ActorKind::Monster | ActorKind::Dragon => VisualProfile::default(),
        }
    }

    pub fn clip_library(&self) -> ClipLibrary {
        match self {
            ActorKind::Player => ClipLibrary::player(),
            _ => ClipLibrary::monster(),
        }
    }

    /// Статы без zone band (Dragon получает band при спавне)
    pub fn base_stats(&self) -> StatBlock {
        match self {
            ActorKind::Player => StatBlock::player(),
            _ => StatBlock::monster(),
        }
    }

    pub fn machine_at(&self, position: Vec2) -> ActionMachine {
        ActionMachine::new(position, self.clip_library(), self.visual_profile())
    }
}

/// Актор (игрок или монстр) — базовый компонент для живых существ
///
/// Автоматически добавляет CombatCooldowns и MoveIntent через Required Components.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(CombatCooldowns, MoveIntent)]
pub struct Actor {
    pub kind: ActorKind,
}

impl Actor {
    pub fn new(kind: ActorKind) -> Self {
        Self { kind }
    }
}

/// Маркер: актор мёртв (игрок остаётся в мире, монстры деспавнятся)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Dead;

/// Опыт, который получит убийца
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Bounty {
    pub experience: u32,
}
