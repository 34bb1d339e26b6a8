use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::error::{Result, ShapeError};
use crate::geometry::Shape;
use crate::operations::shaping::Extrude;
use crate::operations::transform::Transform;
use crate::scene::{Color, Material, MeshObject, Side};
use crate::tessellation::TessellationParams;

/// Dimensions of a stadium-shaped outsole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutsoleParams {
    /// Overall heel-to-toe length, arcs included.
    pub length: f64,
    /// Width at the widest point; also the diameter of both end arcs.
    pub width: f64,
    /// Extrusion depth.
    pub thickness: f64,
}

impl Default for OutsoleParams {
    fn default() -> Self {
        Self {
            length: 8.0,
            width: 3.0,
            thickness: 0.3,
        }
    }
}

impl OutsoleParams {
    /// Smallest accepted length, width or thickness.
    pub const MIN_DIMENSION: f64 = 1e-3;

    /// Checks that the dimensions describe a proper stadium.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidParameter`] if a dimension is not finite or
    /// below [`Self::MIN_DIMENSION`], or the width is not smaller than the length.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("length", self.length),
            ("width", self.width),
            ("thickness", self.thickness),
        ] {
            if !value.is_finite() || value < Self::MIN_DIMENSION {
                return Err(ShapeError::InvalidParameter {
                    parameter,
                    value,
                    reason: "must be finite and at least 0.001",
                }
                .into());
            }
        }
        if self.width >= self.length {
            return Err(ShapeError::InvalidParameter {
                parameter: "width",
                value: self.width,
                reason: "must be smaller than the length",
            }
            .into());
        }
        Ok(())
    }

    /// Radius of the heel and toe arcs.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }

    /// Distance between the two arc centers, i.e. the length of each straight edge.
    #[must_use]
    pub fn straight_length(&self) -> f64 {
        self.length - self.width
    }
}

/// Builds the stadium-shaped outsole mesh.
pub struct MakeOutsole {
    params: OutsoleParams,
    tessellation: TessellationParams,
}

impl MakeOutsole {
    /// Name given to the resulting object.
    pub const NAME: &'static str = "Outsole";

    /// Creates a new `MakeOutsole` operation with default tessellation.
    #[must_use]
    pub fn new(params: OutsoleParams) -> Self {
        Self {
            params,
            tessellation: TessellationParams::default(),
        }
    }

    /// Sets custom tessellation parameters for the heel and toe arcs.
    #[must_use]
    pub fn with_tessellation(mut self, tessellation: TessellationParams) -> Self {
        self.tessellation = tessellation;
        self
    }

    /// Traces the closed stadium outline in the XY plane, centered on the origin.
    ///
    /// Bottom edge left to right, toe arc bottom to top, top edge right to
    /// left, heel arc top to bottom. Both arcs run counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidParameter`] for invalid dimensions.
    pub fn outline(&self) -> Result<Shape> {
        self.params.validate()?;
        let r = self.params.radius();
        let s = self.params.straight_length() / 2.0;

        let mut shape = Shape::new();
        shape
            .move_to(-s, -r)?
            .line_to(s, -r)?
            .absarc(s, 0.0, r, -FRAC_PI_2, FRAC_PI_2, false)?
            .line_to(-s, r)?
            .absarc(-s, 0.0, r, FRAC_PI_2, -FRAC_PI_2, false)?
            .close_path()?;
        Ok(shape)
    }

    /// Executes the operation: extrudes the outline by the thickness and lays
    /// the result flat (−90° about X) at the origin.
    ///
    /// The mesh stays in its extrusion frame (outline in XY, thickness along
    /// +Z); the placement lives in the object's transform.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid dimensions or tessellation parameters.
    pub fn execute(&self) -> Result<MeshObject> {
        let shape = self.outline()?;
        let mesh = Extrude::new(&shape, self.params.thickness)
            .with_params(self.tessellation)
            .execute()?;

        debug!(
            length = self.params.length,
            width = self.params.width,
            thickness = self.params.thickness,
            triangles = mesh.triangle_count(),
            "built outsole"
        );

        let material = Material {
            color: Color::from_hex(0x333333),
            roughness: 0.8,
            metalness: 0.1,
            side: Side::Double,
        };
        let transform = Transform::from_euler_xyz(-FRAC_PI_2, 0.0, 0.0);
        let object = MeshObject::new(Self::NAME, mesh, material);
        Ok(object.with_transform(transform))
    }
}

/// Builds the default 8 × 3 × 0.3 outsole.
///
/// # Errors
///
/// Does not fail with the default dimensions; errors are only propagated
/// from the underlying operations.
pub fn create_outsole() -> Result<MeshObject> {
    MakeOutsole::new(OutsoleParams::default()).execute()
}
