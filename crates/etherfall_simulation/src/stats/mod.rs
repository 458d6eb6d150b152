//! Stats domain — числовые характеристики акторов
//!
//! Содержит:
//! - ScalarRange (clamped integer: health, ether)
//! - StatBlock (health/ether + speed/attack/power/defence, damage formula, upgrades)

pub mod range;
pub mod block;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod block_tests;

pub use range::*;
pub use block::*;
