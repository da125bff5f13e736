//! Rendering collaborator.
//!
//! The simulation only needs something it can hand a phenotype to once per frame.
//! [`SceneContext`] keeps a headless model of the scene (placement, spin, geometry,
//! material); [`TerminalRenderer`] draws that scene as colored glyphs.

pub mod scene;
pub mod terminal;

use crate::engines::genetics::Phenotype;
use crate::error::Result;
use crate::types::GridPosition;

pub use scene::{Geometry, Material, RenderObject, SceneContext, SceneStats};
pub use terminal::TerminalRenderer;

/// Opaque reference to one visual object, issued by [`Renderer::spawn`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub(crate) usize);

pub trait Renderer {
    /// Create a visual object at a grid cell
    fn spawn(&mut self, position: GridPosition) -> RenderHandle;

    /// Make the object show `phenotype`. Called for every object every frame.
    fn apply_phenotype(&mut self, handle: RenderHandle, phenotype: &Phenotype);

    /// End of frame
    fn present(&mut self) -> Result<()>;
}
