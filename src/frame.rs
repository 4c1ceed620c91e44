//! Frame-rate tracking and the debug overlay snapshot
//!
//! The simulation never reads a clock. The host's frame loop passes in its
//! timestamps, and the renderer reads a [`DebugSnapshot`].

use serde::Serialize;

use crate::sim::GameState;

/// Frames in the rolling window
pub const FRAME_WINDOW: usize = 60;

/// Rolling frames-per-second counter
#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_times: [f64; FRAME_WINDOW],
    frame_index: usize,
    recorded: usize,
    fps: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; FRAME_WINDOW],
            frame_index: 0,
            recorded: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp in milliseconds
    pub fn record(&mut self, timestamp_ms: f64) {
        // Oldest sample is the one about to be overwritten once the window is full
        let oldest = if self.recorded >= FRAME_WINDOW {
            Some(self.frame_times[self.frame_index])
        } else if self.recorded > 0 {
            Some(self.frame_times[0])
        } else {
            None
        };
        let frames = self.recorded.min(FRAME_WINDOW);

        self.frame_times[self.frame_index] = timestamp_ms;
        self.frame_index = (self.frame_index + 1) % FRAME_WINDOW;
        self.recorded += 1;

        if let Some(oldest) = oldest {
            let elapsed = timestamp_ms - oldest;
            if elapsed > 0.0 {
                self.fps = (frames as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Values shown by the debug overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugSnapshot {
    pub fps: u32,
    pub entity_y: f32,
    pub velocity: f32,
    pub score: u64,
    pub obstacle_count: usize,
    pub debug: bool,
}

impl DebugSnapshot {
    pub fn capture(state: &GameState, frames: &FrameStats) -> Self {
        Self {
            fps: frames.fps(),
            entity_y: state.entity().pos.y,
            velocity: state.entity().velocity,
            score: state.score(),
            obstacle_count: state.field().len(),
            debug: state.debug(),
        }
    }

    /// Overlay text, one line per value
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {}", self.fps),
            format!("Entity Y: {:.1}", self.entity_y),
            format!("Velocity: {:.1}", self.velocity),
            format!("Score: {}", self.score),
            format!("Obstacles: {}", self.obstacle_count),
        ]
    }
}
