//! Clip catalogue: timings and frame sizes per actor kind.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::action::Facing;

/// Идентификатор клипа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum Clip {
    Standing,
    RunLeft,
    RunRight,
    Attack(Facing),
    Dodge(Facing),
    BlockStartup(Facing),
    BlockStand(Facing),
    BlockWalk(Facing),
    Damage(Facing),
}

/// Тайминг и размер кадра одного клипа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct ClipSpec {
    pub frames: u32,
    pub fps: u32,
    /// Размер кадра в пикселях спрайта (без combat scale)
    pub frame_size: UVec2,
}

impl ClipSpec {
    pub const fn new(frames: u32, fps: u32, frame_size: UVec2) -> Self {
        Self {
            frames,
            fps,
            frame_size,
        }
    }

    /// `ceil(frames × HZ / fps)`, минимум 1 тик
    pub fn duration_ticks(&self) -> u32 {
        if self.fps == 0 {
            return 1;
        }
        let ticks = (self.frames as u64 * crate::SIMULATION_HZ as u64).div_ceil(self.fps as u64);
        (ticks as u32).max(1)
    }
}

const FRAME_64: UVec2 = UVec2::new(64, 64);

/// Набор клипов одного вида актора
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
pub struct ClipLibrary {
    pub standing: ClipSpec,
    pub run: ClipSpec,
    pub attack: ClipSpec,
    pub dodge: ClipSpec,
    pub block_startup: ClipSpec,
    pub block_stand: ClipSpec,
    pub block_walk: ClipSpec,
    pub damage: ClipSpec,
}

impl Default for ClipLibrary {
    fn default() -> Self {
        Self {
            standing: ClipSpec::new(4, 10, FRAME_64),
            run: ClipSpec::new(6, 10, FRAME_64),
            attack: ClipSpec::new(6, 30, FRAME_64),
            dodge: ClipSpec::new(6, 20, FRAME_64),
            block_startup: ClipSpec::new(3, 15, FRAME_64),
            block_stand: ClipSpec::new(4, 10, FRAME_64),
            block_walk: ClipSpec::new(6, 10, FRAME_64),
            damage: ClipSpec::new(4, 10, FRAME_64),
        }
    }
}

impl ClipLibrary {
    /// Игрок: широкий кадр атаки (замах мечом)
    pub fn player() -> Self {
        Self {
            attack: ClipSpec::new(6, 30, UVec2::new(96, 64)),
            ..Self::default()
        }
    }

    pub fn monster() -> Self {
        Self::default()
    }

    pub fn spec(&self, clip: Clip) -> ClipSpec {
        match clip {
            Clip::Standing => self.standing,
            Clip::RunLeft | Clip::RunRight => self.run,
            Clip::Attack(_) => self.attack,
            Clip::Dodge(_) => self.dodge,
            Clip::BlockStartup(_) => self.block_startup,
            Clip::BlockStand(_) => self.block_stand,
            Clip::BlockWalk(_) => self.block_walk,
            Clip::Damage(_) => self.damage,
        }
    }
}

/// Смещение спрайта во время атаки (draw offset)
///
/// Используется и рендером, и weapon hitbox.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect, Serialize, Deserialize)]
pub struct VisualProfile {
    pub attack_offset_left: Vec2,
    pub attack_offset_right: Vec2,
}

impl VisualProfile {
    pub fn player() -> Self {
        Self {
            attack_offset_left: Vec2::new(16.0, 0.0),
            attack_offset_right: Vec2::new(-16.0, 0.0),
        }
    }

    /// Mage / Firemonster: сдвиг только при атаке влево
    pub fn caster() -> Self {
        Self {
            attack_offset_left: Vec2::new(-32.0, 0.0),
            attack_offset_right: Vec2::ZERO,
        }
    }

    pub fn attack_offset(&self, facing: Facing) -> Vec2 {
        match facing {
            Facing::Left => self.attack_offset_left,
            Facing::Right => self.attack_offset_right,
        }
    }
}
