use crate::error::{Error, Result};

/// Regular grid the samples live on
///
/// Dimensions are given x-fastest, matching the sample order of the volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    dimensions: [usize; 3],
    spacing: [f64; 3],
    origin: [f64; 3],
    num_points: usize,
}

impl Grid {
    pub fn new(dimensions: [usize; 3], spacing: [f64; 3], origin: [f64; 3]) -> Result<Self> {
        if dimensions.contains(&0) {
            return Err(Error::InvalidGrid(format!(
                "dimensions must be positive, got {dimensions:?}"
            )));
        }
        if spacing.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
            return Err(Error::InvalidGrid(format!(
                "spacing must be positive, got {spacing:?}"
            )));
        }
        if origin.iter().any(|o| !o.is_finite()) {
            return Err(Error::InvalidGrid(format!(
                "origin must be finite, got {origin:?}"
            )));
        }

        let num_points = dimensions
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| {
                Error::InvalidGrid(format!("too many points for dimensions {dimensions:?}"))
            })?;

        Ok(Self {
            dimensions,
            spacing,
            origin,
            num_points,
        })
    }

    pub fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    pub fn spacing(&self) -> [f64; 3] {
        self.spacing
    }

    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    /// nx * ny * nz
    pub fn num_points(&self) -> usize {
        self.num_points
    }
}
