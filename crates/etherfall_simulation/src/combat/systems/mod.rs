//! Combat systems (movement pass, attacks, cooldowns, deaths)

pub mod attacks;
pub mod deaths;
pub mod movement;


// Re-export all systems
pub use attacks::*;
pub use deaths::*;
pub use movement::*;
