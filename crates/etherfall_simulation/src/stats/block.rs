//! Combat attributes of one actor: resource pools, scalars, damage formula, upgrades.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::range::ScalarRange;

/// Прирост выбранной оси при upgrade
pub const UPGRADE_UP: f32 = 1.0;
/// Штраф остальным трём осям при upgrade
pub const UPGRADE_DOWN: f32 = 0.25;
/// max health = BASE_MAX_HEALTH + floor(HEALTH_PER_DEFENCE × defence)
pub const BASE_MAX_HEALTH: i32 = 70;
pub const HEALTH_PER_DEFENCE: f32 = 10.0;

/// Ось stat-trade апгрейда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum StatAxis {
    Speed,
    Attack,
    Power,
    Defence,
}

/// Характеристики актора
///
/// Инвариант: health/ether всегда внутри своих Range.
/// speed/attack/power/defence не ограничены (могут уйти в минус после апгрейдов).
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct StatBlock {
    health: ScalarRange,
    ether: ScalarRange,
    speed: f32,
    attack: f32,
    power: f32,
    defence: f32,
}

impl StatBlock {
    pub fn new(health: i32, ether: i32, speed: f32, attack: f32, power: f32, defence: f32) -> Self {
        Self {
            health: ScalarRange::new(health),
            ether: ScalarRange::new(ether),
            speed,
            attack,
            power,
            defence,
        }
    }

    /// Стартовые статы игрока
    pub fn player() -> Self {
        Self::new(100, 100, 10.0, 1.0, 1.0, 1.0)
    }

    /// Базовый монстр (без зоны)
    pub fn monster() -> Self {
        Self::new(100, 100, 1.0, 1.0, 1.0, 1.0)
    }

    /// Zone-scaled статы (Dragon-tier монстры).
    ///
    /// attack/speed/defence: `min(floor(r·(level+5)) + (zone−1)·4 + 3, zone·15)`,
    /// health `(zone+1)·250`, ether 100, power 1.
    pub fn for_zone(zone: u32, player_level: u32, rng: &mut impl Rng) -> Self {
        let zone = zone.max(1);
        let mut roll = || {
            let spread = (rng.gen::<f64>() * f64::from(player_level + 5)).floor() as u32;
            (spread + (zone - 1) * 4 + 3).min(zone * 15) as f32
        };

        let attack = roll();
        let speed = roll();
        let defence = roll();
        let health = ((zone + 1) * 250) as i32;

        Self::new(health, 100, speed, attack, 1.0, defence)
    }

    pub fn health(&self) -> &ScalarRange {
        &self.health
    }

    pub fn ether(&self) -> &ScalarRange {
        &self.ether
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn attack(&self) -> f32 {
        self.attack
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn defence(&self) -> f32 {
        self.defence
    }

    pub fn health_percent(&self) -> f32 {
        self.health.percent()
    }

    pub fn ether_percent(&self) -> f32 {
        self.ether.percent()
    }

    pub fn set_max_health(&mut self, new_max: i32) {
        self.health.rebind_max(new_max);
    }

    /// Отрицательный урон — no-op (никогда не лечит)
    pub fn take_damage(&mut self, amount: i32) {
        let amount = amount.max(0);
        self.health.set(self.health.get().saturating_sub(amount));
    }

    pub fn heal(&mut self, amount: i32) {
        let amount = amount.max(0);
        self.health.set(self.health.get().saturating_add(amount));
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_at_floor()
    }

    pub fn spend_ether(&mut self, amount: i32) {
        let amount = amount.max(0);
        self.ether.set(self.ether.get().saturating_sub(amount));
    }

    pub fn gain_ether(&mut self, amount: i32) {
        let amount = amount.max(0);
        self.ether.set(self.ether.get().saturating_add(amount));
    }

    /// Strict: amount == current считается недоступным
    pub fn has_ether_for(&self, amount: i32) -> bool {
        amount < self.ether.get()
    }

    /// Stat trade: +UP выбранной оси, −DOWN остальным, затем пересчёт max health.
    ///
    /// Defence меняется ДО пересчёта, так что апгрейд не-defence оси режет max health.
    pub fn upgrade(&mut self, axis: StatAxis) {
        let step = |value: &mut f32, target: StatAxis| {
            if target == axis {
                *value += UPGRADE_UP;
            } else {
                *value -= UPGRADE_DOWN;
            }
        };
        step(&mut self.speed, StatAxis::Speed);
        step(&mut self.attack, StatAxis::Attack);
        step(&mut self.power, StatAxis::Power);
        step(&mut self.defence, StatAxis::Defence);

        self.set_max_health(max_health_for_defence(self.defence));
    }

    /// Опыт за убийство актора с этими статами
    pub fn experience_reward(&self) -> u32 {
        let reward = 20.0 * self.defence + 30.0 * self.attack + 15.0 * self.speed;
        reward.max(0.0).floor() as u32
    }
}

pub fn max_health_for_defence(defence: f32) -> i32 {
    BASE_MAX_HEALTH + (HEALTH_PER_DEFENCE * defence).floor() as i32
}

/// `floor(25 × (attack − defence) / (defence + 1) + 15)`
///
/// Может быть отрицательным при большой defence — caller пропускает результат
/// через zero-floor в `StatBlock::take_damage`.
pub fn compute_damage(attack_or_power: f32, defence: f32) -> i32 {
    let attack = f64::from(attack_or_power);
    let defence = f64::from(defence);
    let result = 25.0 * (attack - defence) / (defence + 1.0) + 15.0;
    result.floor() as i32
}
