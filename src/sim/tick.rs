//! Fixed timestep simulation tick
//!
//! Advances the animation deterministically from a per-tick command record.

use super::state::{ForceKind, SimState, Speed};
use crate::consts::*;

/// Input commands for a single tick
///
/// Force fields are level inputs refreshed every tick; the rest are edge
/// commands cleared by the caller once processed.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Applied force field value; `None` when unparsable (keeps the prior value)
    pub applied_force: Option<f32>,
    /// Friction force field value; `None` when unparsable (keeps the prior value)
    pub friction_force: Option<f32>,
    /// Start the animation
    pub play: bool,
    /// Stop the animation
    pub pause: bool,
    /// Reset position and displacement
    pub replay: bool,
    /// Change the advance rate
    pub speed: Option<Speed>,
    /// Change which force the work readout tracks
    pub force_kind: Option<ForceKind>,
    /// Flip the force-diagram overlay
    pub toggle_diagram: bool,
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput) {
    // Unparsable fields leave the previous value in place rather than
    // letting a NaN reach the work readout
    if let Some(force) = input.applied_force {
        state.applied_force = force;
    }
    if let Some(force) = input.friction_force {
        state.friction_force = force;
    }

    if input.replay {
        state.reset();
        log::info!("Replay: block returned to start");
    }
    if let Some(speed) = input.speed {
        state.speed = speed;
    }
    if let Some(kind) = input.force_kind {
        state.force_kind = kind;
    }
    if input.toggle_diagram {
        state.show_diagram = !state.show_diagram;
    }
    if input.play {
        state.playing = true;
    }
    if input.pause {
        state.playing = false;
    }

    if state.playing && !state.at_bound() {
        // Truncate the last step so the block lands exactly on the bound
        let advance = state.speed.px_per_tick().min(BLOCK_MAX_X - state.block_x);
        state.block_x += advance;
        state.displacement += advance * METERS_PER_PIXEL;
    }
    if state.playing && state.at_bound() {
        state.playing = false;
        log::info!("Block reached the travel bound, stopping");
    }

    // Recomputed every tick so the readout is never stale
    state.recompute_work();
}
