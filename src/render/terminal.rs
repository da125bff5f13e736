use super::scene::{RenderObject, SceneContext};
use super::{RenderHandle, Renderer};
use crate::engines::genetics::Phenotype;
use crate::error::Result;
use crate::types::GridPosition;
use std::collections::HashMap;
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
const RESET: &str = "\x1b[0m";

/// Draws the scene as 24-bit colored glyphs every `redraw_every` frames.
/// The highest row prints first so row 0 sits at the bottom, as in world space.
pub struct TerminalRenderer<W: Write> {
    scene: SceneContext,
    out: W,
    redraw_every: usize,
    clear_screen: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(scene: SceneContext, out: W, redraw_every: usize) -> Self {
        Self {
            scene,
            out,
            redraw_every: redraw_every.max(1),
            clear_screen: false,
        }
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn scene(&self) -> &SceneContext {
        &self.scene
    }

    pub fn into_parts(self) -> (SceneContext, W) {
        (self.scene, self.out)
    }

    /// Write the current grid regardless of cadence
    pub fn draw(&mut self) -> Result<()> {
        let objects = self.scene.objects();
        if objects.is_empty() {
            return Ok(());
        }

        let columns = objects.iter().map(|o| o.position.column).max().unwrap_or(0) + 1;
        let rows = objects.iter().map(|o| o.position.row).max().unwrap_or(0) + 1;
        let by_position: HashMap<GridPosition, &RenderObject> =
            objects.iter().map(|o| (o.position, o)).collect();

        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str(CLEAR_SCREEN);
        }
        frame.push_str(&format!("frame {}\n", self.scene.frames()));

        for row in (0..rows).rev() {
            for column in 0..columns {
                match by_position.get(&GridPosition::new(column, row)) {
                    Some(object) => frame.push_str(&cell(object)),
                    None => frame.push_str("  "),
                }
            }
            frame.push('\n');
        }

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

fn cell(object: &RenderObject) -> String {
    let [r, g, b] = object.material.color.map(|c| (c * 256.0).clamp(0.0, 255.0) as u8);
    format!("\x1b[38;2;{};{};{}m{}{} ", r, g, b, object.shape.glyph(), RESET)
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn spawn(&mut self, position: GridPosition) -> RenderHandle {
        self.scene.spawn(position)
    }

    fn apply_phenotype(&mut self, handle: RenderHandle, phenotype: &Phenotype) {
        self.scene.apply_phenotype(handle, phenotype);
    }

    fn present(&mut self) -> Result<()> {
        self.scene.present()?;
        if self.scene.frames() % self.redraw_every as u64 == 0 {
            self.draw()?;
        }
        Ok(())
    }
}
