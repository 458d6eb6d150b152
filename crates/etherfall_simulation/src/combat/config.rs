//! Combat constants (resource).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Параметры hit-testing и cooldowns
///
/// Значения по умолчанию откалиброваны под спрайты 64×64 и combat scale 2.
#[derive(Resource, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct CombatConfig {
    /// Combat scale S (пиксели спрайта → мировые единицы)
    pub scale: i32,
    /// Базовый размер спрайта для body hitbox
    pub sprite_size: i32,
    /// body width = trunc(sprite × S / divisor)
    pub body_width_divisor: f64,
    /// body height = trunc(sprite × S / divisor)
    pub body_height_divisor: f64,
    /// Дистанция weapon hitbox от центра (игрок)
    pub player_weapon_reach: i32,
    /// Дистанция weapon hitbox от центра (монстры)
    pub monster_weapon_reach: i32,
    pub monster_weapon_width: i32,
    /// Вертикальный сдвиг weapon hitbox вниз
    pub weapon_vertical_offset: i32,
    /// Отскок при прерванном dodge
    pub bounce_distance: f32,
    /// Тиков до снятия Attack у нападающего после попадания
    pub attack_cooldown_ticks: u32,
    /// Тиков до снятия damage reaction у жертвы
    pub damage_cooldown_ticks: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            scale: 2,
            sprite_size: 64,
            body_width_divisor: 2.25,
            body_height_divisor: 1.6,
            player_weapon_reach: 64,
            monster_weapon_reach: 45,
            monster_weapon_width: 32,
            weapon_vertical_offset: 10,
            bounce_distance: 10.0,
            attack_cooldown_ticks: 60,
            damage_cooldown_ticks: 60,
        }
    }
}

impl CombatConfig {
    pub fn body_width(&self) -> i32 {
        (f64::from(self.sprite_size * self.scale) / self.body_width_divisor) as i32
    }

    pub fn body_height(&self) -> i32 {
        (f64::from(self.sprite_size * self.scale) / self.body_height_divisor) as i32
    }
}
