//! Clamped integer quantity (health, ether pools).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Целое значение в фиксированных границах `[min, max]`
///
/// Инвариант: min ≤ current ≤ max. Любая запись клампится, ничего не отклоняется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct ScalarRange {
    min: i32,
    max: i32,
    current: i32,
}

impl ScalarRange {
    /// `[0, max]`, current = max.
    pub fn new(max: i32) -> Self {
        Self::with_bounds(0, max)
    }

    /// `[min, max]`, current = max.
    pub fn with_bounds(min: i32, max: i32) -> Self {
        Self::with_current(min, max, max)
    }

    /// `[min, max]` с заданным current (клампится).
    ///
    /// `max < min` сводится к пустому интервалу `[min, min]`.
    pub fn with_current(min: i32, max: i32, current: i32) -> Self {
        let mut range = Self {
            min,
            max: max.max(min),
            current: min,
        };
        range.set(current);
        range
    }

    pub fn set(&mut self, value: i32) {
        self.current = if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        };
    }

    pub fn get(&self) -> i32 {
        self.current
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// current / max (0.0 для вырожденного max == 0)
    pub fn percent(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }

    pub fn is_at_floor(&self) -> bool {
        self.current == self.min
    }

    pub fn is_at_ceiling(&self) -> bool {
        self.current == self.max
    }

    /// Меняет верхнюю границу, сохраняя прежний current (повторный clamp).
    pub fn rebind_max(&mut self, new_max: i32) {
        let current = self.current;
        self.max = new_max.max(self.min);
        self.set(current);
    }
}
