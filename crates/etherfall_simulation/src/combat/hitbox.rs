//! Hitbox геометрия для combat
//!
//! Архитектура:
//! - Hitbox — целочисленный AABB, пересчитывается на каждый запрос, не хранится
//! - Body hitbox — тело актора (56×80 при scale 2)
//! - Weapon hitbox — существует только во время Attack
//! - Tile hitbox — клетка стены в мировых координатах

use bevy::prelude::*;

use crate::action::ActionMachine;
use crate::actor::ActorKind;
use crate::combat::CombatConfig;

/// Axis-aligned прямоугольник (x, y — левый верхний угол)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Hitbox {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Строгое пересечение: касание краями не считается.
    /// Прямоугольник с неположительным размером не пересекается ни с чем.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }

        let (ax, ay) = (i64::from(self.x), i64::from(self.y));
        let (bx, by) = (i64::from(other.x), i64::from(other.y));

        ax < bx + i64::from(other.width)
            && bx < ax + i64::from(self.width)
            && ay < by + i64::from(other.height)
            && by < ay + i64::from(self.height)
    }
}

/// Тело актора в позиции `position`
pub fn body_hitbox(position: Vec2, config: &CombatConfig) -> Hitbox {
    Hitbox::new(
        position.x as i32,
        position.y as i32,
        config.body_width(),
        config.body_height(),
    )
}

/// Оружие (только во время атаки)
///
/// `y = pos.y − offset.y·S + 10`, `h = trunc(frame.h·S/4)`.
/// Игрок: `x = pos.x − offset.x + dir·64`, `w = frame.w`.
/// Монстры: `x = pos.x − offset.x + dir·45`, `w = 32`.
pub fn weapon_hitbox(machine: &ActionMachine, kind: ActorKind, config: &CombatConfig) -> Option<Hitbox> {
    if !machine.is_attacking() {
        return None;
    }

    let position = machine.position();
    let offset = machine.current_visual_offset();
    let frame = machine.action_frame_size();
    let direction = machine.facing().sign();
    let scale = config.scale as f32;

    let y = (position.y - offset.y * scale + config.weapon_vertical_offset as f32) as i32;
    let height = ((frame.y as f32 * scale) / 4.0) as i32;

    let (reach, width) = if kind.is_player() {
        (config.player_weapon_reach, frame.x as i32)
    } else {
        (config.monster_weapon_reach, config.monster_weapon_width)
    };
    let x = (position.x - offset.x + direction * reach as f32) as i32;

    Some(Hitbox::new(x, y, width, height))
}

/// Клетка (i, j) карты; `tile_size` уже с учётом combat scale
pub fn tile_hitbox(i: i32, j: i32, tile_size: i32) -> Hitbox {
    Hitbox::new(i * tile_size, j * tile_size, tile_size, tile_size)
}
