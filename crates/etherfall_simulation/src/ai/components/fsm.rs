//! FSM AI components (state machine, config).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// AI FSM состояния (пересчитываются каждый тик по дистанции до игрока)
#[derive(Component, Debug, Clone, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub enum AIState {
    /// Wander — случайное блуждание (игрок вне aggro range)
    #[default]
    Wander,

    /// Chase — бежим к цели
    Chase { target: Entity },

    /// Engage — стоим рядом с целью и пытаемся атаковать
    Engage { target: Entity },
}

impl AIState {
    pub fn target(&self) -> Option<Entity> {
        match self {
            AIState::Wander => None,
            AIState::Chase { target } | AIState::Engage { target } => Some(*target),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AIState::Wander => "Wander",
            AIState::Chase { .. } => "Chase",
            AIState::Engage { .. } => "Engage",
        }
    }
}

/// Параметры AI
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct AIConfig {
    /// Не ближе — блуждаем (строго меньше = Chase)
    pub aggro_range: f32,
    /// Ближе — останавливаемся и атакуем
    pub engage_distance: f32,
    /// Максимальная дистанция для попытки атаки
    pub attack_radius: f32,
    /// Шанс атаки за тик, проценты (roll в [0, 100))
    pub attack_chance_percent: f32,
    /// Смещение за тик при Chase
    pub chase_speed: f32,
    /// Амплитуда случайного отклонения buffered movement при Wander
    pub wander_jitter: f32,
    /// Множитель смещения при Wander
    pub wander_speed: f32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            aggro_range: 500.0,
            engage_distance: 70.0,
            attack_radius: 150.0,
            attack_chance_percent: 0.8,
            chase_speed: 1.0,
            wander_jitter: 0.25,
            wander_speed: 0.5,
        }
    }
}

impl AIConfig {
    /// Выбор состояния по ближайшей цели (entity, дистанция)
    pub fn decide(&self, nearest: Option<(Entity, f32)>) -> AIState {
        match nearest {
            Some((target, distance)) if distance <= self.engage_distance => AIState::Engage { target },
            Some((target, distance)) if distance < self.aggro_range => AIState::Chase { target },
            _ => AIState::Wander,
        }
    }

    /// `(buffered + ((r1 − 0.5)·jitter, (r2 − 0.5)·jitter)) × wander_speed`
    pub fn wander_displacement(&self, buffered: Vec2, r1: f32, r2: f32) -> Vec2 {
        let delta = Vec2::new((r1 - 0.5) * self.wander_jitter, (r2 - 0.5) * self.wander_jitter);
        (buffered + delta) * self.wander_speed
    }

    /// Вдоль нормализованной разницы позиций
    pub fn chase_displacement(&self, from: Vec2, to: Vec2) -> Vec2 {
        (to - from).normalize_or_zero() * self.chase_speed
    }

    /// `roll` в [0, 100)
    pub fn attack_roll_succeeds(&self, roll: f32) -> bool {
        roll < self.attack_chance_percent
    }
}
