//! Actor domain — виды акторов и спавн
//!
//! Содержит:
//! - Actor / ActorKind (игрок, монстры)
//! - Dead, Bounty (смерть и награда за убийство)
//! - bundles для спавна игрока и монстров

pub mod components;
pub mod spawn;

pub use components::*;
pub use spawn::*;
