//! Per-actor combat cooldowns (tick counters).

use bevy::prelude::*;

/// Счётчик, который срабатывает через `period` тиков после `arm`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub struct TickCooldown {
    elapsed: u32,
    armed: bool,
}

impl TickCooldown {
    /// Повторный arm не продлевает уже взведённый счётчик
    pub fn arm(&mut self) {
        if !self.armed {
            self.armed = true;
            self.elapsed = 0;
        }
    }

    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Один тик; true в тик срабатывания (счётчик сбрасывается)
    pub fn tick(&mut self, period: u32) -> bool {
        if !self.armed {
            return false;
        }

        self.elapsed += 1;
        if self.elapsed >= period {
            self.disarm();
            return true;
        }
        false
    }
}

/// Cooldowns атаки/урона одного актора
///
/// `attack` — снимает Attack у нападающего после попадания.
/// `damage` — снимает damage reaction у жертвы.
/// Пока `hitstun` выставлен, оба счётчика заморожены.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CombatCooldowns {
    pub attack: TickCooldown,
    pub damage: TickCooldown,
    hitstun: bool,
}

impl CombatCooldowns {
    pub fn set_hitstun(&mut self, frozen: bool) {
        self.hitstun = frozen;
    }

    pub fn is_hitstunned(&self) -> bool {
        self.hitstun
    }
}
