//! AI components

pub mod attacker;
pub mod fsm;


// Re-export all components
pub use attacker::*;
pub use fsm::*;
