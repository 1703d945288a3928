//! Simulation state and core types
//!
//! Everything the animation needs to advance one frame lives here.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-tick advance rate selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    #[default]
    Normal,
}

impl Speed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Normal => "normal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(Speed::Slow),
            "normal" => Some(Speed::Normal),
            _ => None,
        }
    }

    /// Horizontal advance in pixels per simulation tick
    pub fn px_per_tick(&self) -> f32 {
        match self {
            Speed::Slow => 1.0,
            Speed::Normal => 2.0,
        }
    }
}

/// Which force the work readout tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ForceKind {
    #[default]
    Applied,
    Frictional,
    Normal,
    Gravitational,
}

impl ForceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForceKind::Applied => "applied",
            ForceKind::Frictional => "frictional",
            ForceKind::Normal => "normal",
            ForceKind::Gravitational => "gravitational",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "applied" => Some(ForceKind::Applied),
            "frictional" => Some(ForceKind::Frictional),
            "normal" => Some(ForceKind::Normal),
            "gravitational" => Some(ForceKind::Gravitational),
            _ => None,
        }
    }

    /// Signed horizontal component used for the work computation
    ///
    /// Friction opposes the motion, so its contribution is negative. Normal
    /// and gravitational forces act perpendicular to the travel direction in
    /// this 1-D model and contribute nothing.
    pub fn lateral(&self, applied: f32, friction: f32) -> f32 {
        match self {
            ForceKind::Applied => applied,
            ForceKind::Frictional => -friction,
            ForceKind::Normal | ForceKind::Gravitational => 0.0,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Horizontal block offset in pixels
    pub block_x: f32,
    /// Cumulative travel in meters since the last reset
    pub displacement: f32,
    /// Applied force magnitude (N)
    pub applied_force: f32,
    /// Frictional force magnitude (N)
    pub friction_force: f32,
    /// Work done by the selected force (J); derived, never edited directly
    pub work: f32,
    /// Whether the animation is advancing
    pub playing: bool,
    /// Advance rate
    pub speed: Speed,
    /// Force tracked by the work readout
    pub force_kind: ForceKind,
    /// Force-diagram overlay visibility
    pub show_diagram: bool,
}

impl SimState {
    /// Create the startup state with the demo defaults
    pub fn new() -> Self {
        let mut state = Self {
            block_x: BLOCK_START_X,
            displacement: 0.0,
            applied_force: 100.0,
            friction_force: 20.0,
            work: 0.0,
            playing: false,
            speed: Speed::Normal,
            force_kind: ForceKind::Applied,
            show_diagram: true,
        };
        state.recompute_work();
        state
    }

    /// True once the block has reached the travel bound
    pub fn at_bound(&self) -> bool {
        self.block_x >= BLOCK_MAX_X
    }

    /// Stop and return the block to its starting position
    pub fn reset(&mut self) {
        self.playing = false;
        self.block_x = BLOCK_START_X;
        self.displacement = 0.0;
        self.recompute_work();
    }

    /// Refresh the derived work readout from current forces and displacement
    pub fn recompute_work(&mut self) {
        self.work =
            self.force_kind.lateral(self.applied_force, self.friction_force) * self.displacement;
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}
