//! Action state and facing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// −1 влево, +1 вправо
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Текущее действие актора (ровно одно)
///
/// Attack и Dodge взаимоисключающие по построению. Damage reaction —
/// отдельный визуальный overlay в `ActionMachine`, не состояние.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum ActionState {
    #[default]
    Standing,
    RunLeft,
    RunRight,
    Attack,
    Dodge,
    /// Вход в блок (клип проигрывается один раз, затем BlockStand)
    BlockStartup,
    BlockStand,
    BlockWalk,
}

impl ActionState {
    pub fn is_attacking(&self) -> bool {
        matches!(self, ActionState::Attack)
    }

    pub fn is_dodging(&self) -> bool {
        matches!(self, ActionState::Dodge)
    }

    /// Включая фазу входа
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            ActionState::BlockStartup | ActionState::BlockStand | ActionState::BlockWalk
        )
    }

    pub fn is_initiating_block(&self) -> bool {
        matches!(self, ActionState::BlockStartup)
    }

    /// Удерживаемый блок (после входа)
    pub fn is_holding_block(&self) -> bool {
        matches!(self, ActionState::BlockStand | ActionState::BlockWalk)
    }

    pub fn is_locomotion(&self) -> bool {
        matches!(
            self,
            ActionState::Standing | ActionState::RunLeft | ActionState::RunRight
        )
    }
}
