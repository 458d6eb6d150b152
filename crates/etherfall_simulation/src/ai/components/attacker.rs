//! Attacker component — таймер между попытками атаки монстра

use bevy::prelude::*;

/// Attacker — компонент для монстров, которые решают атаковать сами
///
/// Таймер в тиках симуляции; уменьшается в каждом тике Engage, пока > 0.
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Attacker {
    /// Пауза между атаками (тики)
    pub attack_cooldown: u32,

    /// Текущий таймер (0 = готов атаковать)
    pub cooldown_timer: u32,
}

impl Default for Attacker {
    fn default() -> Self {
        Self {
            attack_cooldown: 60,
            cooldown_timer: 0,
        }
    }
}

impl Attacker {
    pub fn can_attack(&self) -> bool {
        self.cooldown_timer == 0
    }

    pub fn start_attack(&mut self) {
        self.cooldown_timer = self.attack_cooldown;
    }

    pub fn tick(&mut self) {
        self.cooldown_timer = self.cooldown_timer.saturating_sub(1);
    }
}
