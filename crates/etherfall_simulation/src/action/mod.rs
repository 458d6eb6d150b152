//! Action state machine
//!
//! Содержит:
//! - `ActionState` / `Facing` — текущее действие и направление взгляда
//! - `ActionMachine` — позиция + действие + клип, переходы по completion клипа
//! - `MoveIntent` — желаемое смещение на этот тик (от input или AI)
//!
//! Порядок за тик: playback.advance → requests → plan → (resolver veto) → commit.

pub mod machine;
pub mod state;

#[cfg(test)]
mod machine_tests;

pub use machine::*;
pub use state::*;
