use serde::{Deserialize, Serialize};
use std::fmt;

/// Geometry a member is displayed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Cube,
    Sphere,
    Tetrahedron,
}

impl Shape {
    /// Single-character glyph used by the terminal renderer
    pub fn glyph(&self) -> char {
        match self {
            Shape::Cube => '■',
            Shape::Sphere => '●',
            Shape::Tetrahedron => '▲',
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Cube => "cube",
            Shape::Sphere => "sphere",
            Shape::Tetrahedron => "tetrahedron",
        };
        f.write_str(name)
    }
}

/// Cell of the display grid a member occupies. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub column: usize,
    pub row: usize,
}

impl GridPosition {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Counters produced by one pass of the mixing loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Ordered pairs considered (n * (n - 1))
    pub attempts: usize,
    pub crossovers: usize,
    pub mutations: usize,
}

impl TickReport {
    pub fn is_quiet(&self) -> bool {
        self.crossovers == 0
    }
}

/// Aggregate over a whole driver run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: usize,
    pub crossovers: usize,
    pub mutations: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &TickReport) {
        self.frames += 1;
        self.crossovers += report.crossovers;
        self.mutations += report.mutations;
    }
}
