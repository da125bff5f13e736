use super::{RenderHandle, Renderer};
use crate::config::DisplayConfig;
use crate::engines::genetics::Phenotype;
use crate::error::Result;
use crate::types::{GridPosition, Shape};
use serde::Serialize;

/// Mesh parameters per shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Geometry {
    Box { edge: f64 },
    Sphere { radius: f64, segments: u32, rings: u32 },
    Tetrahedron { radius: f64 },
}

impl Geometry {
    pub fn for_shape(shape: Shape) -> Self {
        match shape {
            Shape::Cube => Geometry::Box { edge: 1.5 },
            Shape::Sphere => Geometry::Sphere {
                radius: 1.0,
                segments: 5,
                rings: 5,
            },
            Shape::Tetrahedron => Geometry::Tetrahedron { radius: 1.2 },
        }
    }
}

/// Physically based material parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: [f64; 3],
    pub roughness: f64,
    pub clearcoat: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            roughness: 1.0,
            clearcoat: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderObject {
    pub position: GridPosition,
    /// World-space translation on the xy plane
    pub translation: [f64; 2],
    /// Rotation about x and y, radians
    pub rotation: [f64; 2],
    pub shape: Shape,
    pub geometry: Geometry,
    pub material: Material,
    pub updates: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SceneStats {
    pub objects: usize,
    pub frames: u64,
}

/// Headless scene. Created once at startup, disposed at shutdown.
pub struct SceneContext {
    cell_spacing: f64,
    grid_offset: f64,
    spin_per_frame: f64,
    objects: Vec<RenderObject>,
    frames: u64,
}

impl SceneContext {
    pub fn create(display: &DisplayConfig) -> Self {
        log::info!(
            "Scene created (spacing {}, offset {})",
            display.cell_spacing,
            display.grid_offset
        );

        Self {
            cell_spacing: display.cell_spacing,
            grid_offset: display.grid_offset,
            spin_per_frame: display.spin_per_frame,
            objects: Vec::new(),
            frames: 0,
        }
    }

    pub fn objects(&self) -> &[RenderObject] {
        &self.objects
    }

    pub fn object(&self, handle: RenderHandle) -> Option<&RenderObject> {
        self.objects.get(handle.0)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Tear down the scene, returning what it held
    pub fn dispose(self) -> SceneStats {
        let stats = SceneStats {
            objects: self.objects.len(),
            frames: self.frames,
        };
        log::info!(
            "Scene disposed after {} frames ({} objects)",
            stats.frames,
            stats.objects
        );
        stats
    }

    fn translation(&self, position: GridPosition) -> [f64; 2] {
        [
            position.column as f64 * self.cell_spacing - self.grid_offset,
            position.row as f64 * self.cell_spacing - self.grid_offset,
        ]
    }
}

impl Renderer for SceneContext {
    fn spawn(&mut self, position: GridPosition) -> RenderHandle {
        let handle = RenderHandle(self.objects.len());
        self.objects.push(RenderObject {
            position,
            translation: self.translation(position),
            rotation: [0.0, 0.0],
            shape: Shape::Cube,
            geometry: Geometry::for_shape(Shape::Cube),
            material: Material::default(),
            updates: 0,
        });
        handle
    }

    fn apply_phenotype(&mut self, handle: RenderHandle, phenotype: &Phenotype) {
        let spin = self.spin_per_frame;
        let object = &mut self.objects[handle.0];

        object.rotation[0] += spin;
        object.rotation[1] += spin;

        object.shape = phenotype.shape;
        object.geometry = Geometry::for_shape(phenotype.shape);
        object.material = Material {
            color: [phenotype.red, phenotype.green, phenotype.blue],
            roughness: phenotype.roughness,
            clearcoat: phenotype.clearcoat,
        };
        object.updates += 1;
    }

    fn present(&mut self) -> Result<()> {
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::genetics::{decode, Genome};

    fn phenotype(genes: [f64; 7]) -> Phenotype {
        decode(&Genome::from_genes(genes.to_vec()))
    }

    #[test]
    fn test_spawn_centers_grid() {
        let mut scene = SceneContext::create(&DisplayConfig::default());

        let corner = scene.spawn(GridPosition::new(0, 0));
        let far = scene.spawn(GridPosition::new(5, 5));

        assert_eq!(scene.object(corner).map(|o| o.translation), Some([-6.25, -6.25]));
        assert_eq!(scene.object(far).map(|o| o.translation), Some([6.25, 6.25]));
    }

    #[test]
    fn test_apply_copies_material_and_spins() {
        let mut scene = SceneContext::create(&DisplayConfig::default());
        let handle = scene.spawn(GridPosition::new(1, 2));
        let look = phenotype([0.45, 0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);

        scene.apply_phenotype(handle, &look);
        scene.apply_phenotype(handle, &look);

        let object = scene.object(handle).cloned().unwrap();
        assert_eq!(object.shape, Shape::Sphere);
        assert_eq!(object.material.color, [0.1, 0.2, 0.3]);
        assert_eq!(object.material.roughness, 0.4);
        assert_eq!(object.material.clearcoat, 0.5);
        assert_eq!(object.updates, 2);
        assert!((object.rotation[0] - 0.02).abs() < 1e-12);
        assert_eq!(object.position, GridPosition::new(1, 2));
    }

    #[test]
    fn test_geometry_follows_shape() {
        let mut scene = SceneContext::create(&DisplayConfig::default());
        let handle = scene.spawn(GridPosition::new(0, 0));

        scene.apply_phenotype(handle, &phenotype([0.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(
            scene.object(handle).map(|o| o.geometry),
            Some(Geometry::Tetrahedron { radius: 1.2 })
        );
    }

    #[test]
    fn test_dispose_reports_frames() {
        let mut scene = SceneContext::create(&DisplayConfig::default());
        scene.spawn(GridPosition::new(0, 0));
        scene.present().unwrap();
        scene.present().unwrap();

        assert_eq!(
            scene.dispose(),
            SceneStats {
                objects: 1,
                frames: 2
            }
        );
    }
}
