//! Deterministic simulation module
//!
//! All animation logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Identical results for identical input sequences
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{ForceKind, SimState, Speed};
pub use tick::{TickInput, tick};
