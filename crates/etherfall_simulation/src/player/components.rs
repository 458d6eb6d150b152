//! Player components: marker, aggregated input, progression.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::stats::{StatAxis, StatBlock};

/// Marker component для player-controlled entity
///
/// AI systems используют `Without<Player>`, input systems — `With<Player>`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Удерживаемые кнопки и направление (пишет хост каждый кадр)
///
/// Edge triggers считаются здесь: `edges()` сравнивает с прошлым тиком.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    pub direction: Vec2,
    pub attack: bool,
    pub dodge: bool,
    pub block: bool,
    attack_released: bool,
    dodge_released: bool,
    block_released: bool,
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self {
            direction: Vec2::ZERO,
            attack: false,
            dodge: false,
            block: false,
            attack_released: true,
            dodge_released: true,
            block_released: true,
        }
    }
}

/// Фронты кнопок за один тик
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdges {
    pub attack_pressed: bool,
    pub dodge_pressed: bool,
    pub block_pressed: bool,
    pub block_released: bool,
}

impl PlayerInput {
    pub fn press(&mut self, direction: Vec2, attack: bool, dodge: bool, block: bool) {
        self.direction = direction;
        self.attack = attack;
        self.dodge = dodge;
        self.block = block;
    }

    /// Фронты с прошлого вызова; вызывается один раз за тик
    pub fn edges(&mut self) -> InputEdges {
        let edges = InputEdges {
            attack_pressed: self.attack && self.attack_released,
            dodge_pressed: self.dodge && self.dodge_released,
            block_pressed: self.block && self.block_released,
            block_released: !self.block && !self.block_released,
        };

        self.attack_released = !self.attack;
        self.dodge_released = !self.dodge;
        self.block_released = !self.block;

        edges
    }
}

/// Уровень и опыт игрока
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct PlayerProgress {
    pub level: u32,
    pub experience: u32,
    pub upgrade_points: u32,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            upgrade_points: 0,
        }
    }
}

impl PlayerProgress {
    /// Опыт до следующего уровня
    pub fn experience_to_next(&self) -> u32 {
        100 * self.level
    }

    /// Возвращает кол-во полученных уровней
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut gained = 0;
        while self.experience >= self.experience_to_next() {
            self.experience -= self.experience_to_next();
            self.level += 1;
            self.upgrade_points += 1;
            gained += 1;
        }
        gained
    }

    /// false если очков нет (статы не меняются)
    pub fn spend_upgrade(&mut self, axis: StatAxis, stats: &mut StatBlock) -> bool {
        if self.upgrade_points == 0 {
            return false;
        }
        self.upgrade_points -= 1;
        stats.upgrade(axis);
        true
    }
}
