use super::traits::{ConfigSection, FieldHelp};
use crate::error::GeneDriftError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// World-space distance between neighbouring grid cells
    pub cell_spacing: f64,
    /// Subtracted from both coordinates to center the grid on the origin
    pub grid_offset: f64,
    /// Radians added to each object's x and y rotation per rendered frame
    pub spin_per_frame: f64,
    /// Frames the demo runs before disposing the scene; 0 runs until interrupted
    pub frames: usize,
    pub frame_interval_ms: u64,
    /// Terminal redraw cadence, in frames
    pub redraw_every: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_spacing: 2.5,
            grid_offset: (5.0 * 2.5) / 2.0,
            spin_per_frame: 0.01,
            frames: 600,
            frame_interval_ms: 16,
            redraw_every: 30,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), GeneDriftError> {
        if !(self.cell_spacing > 0.0) {
            return Err(GeneDriftError::Configuration(
                "Cell spacing must be positive".to_string(),
            ));
        }
        if !self.grid_offset.is_finite() || !self.spin_per_frame.is_finite() {
            return Err(GeneDriftError::Configuration(
                "Grid offset and spin must be finite".to_string(),
            ));
        }
        if self.redraw_every == 0 {
            return Err(GeneDriftError::Configuration(
                "Redraw interval must be at least 1 frame".to_string(),
            ));
        }
        Ok(())
    }

    fn field_help() -> &'static [FieldHelp] {
        &[
            FieldHelp {
                name: "cell_spacing",
                range: None,
                help: "Distance between grid cells",
            },
            FieldHelp {
                name: "grid_offset",
                range: None,
                help: "Offset that centers the grid",
            },
            FieldHelp {
                name: "spin_per_frame",
                range: None,
                help: "Rotation per frame in radians",
            },
            FieldHelp {
                name: "frames",
                range: None,
                help: "Frames to run, 0 runs until Ctrl-C",
            },
            FieldHelp {
                name: "frame_interval_ms",
                range: None,
                help: "Delay between frames",
            },
            FieldHelp {
                name: "redraw_every",
                range: None,
                help: "Frames between terminal redraws",
            },
        ]
    }
}
