use serde::{Deserialize, Serialize};

use crate::error::NmsError;

/// Axis-aligned bounding box in inclusive pixel coordinates.
///
/// No ordering is enforced between the corners; an inverted box simply
/// yields a small or negative area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum x coordinate of the bounding box.
    pub xmin: f32,
    /// Minimum y coordinate of the bounding box.
    pub ymin: f32,
    /// Maximum x coordinate of the bounding box.
    pub xmax: f32,
    /// Maximum y coordinate of the bounding box.
    pub ymax: f32,
}

impl BoundingBox {
    /// Create a new bounding box from its corners.
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Area of the box, counting both boundary pixels. Never clamped.
    pub fn area(&self) -> f32 {
        (self.xmax - self.xmin + 1.) * (self.ymax - self.ymin + 1.)
    }

    /// Overlap of two boxes relative to the smaller one.
    ///
    /// See [`overlap_over_min_area`].
    pub fn overlap(&self, other: &BoundingBox) -> f32 {
        overlap_over_min_area(self, other)
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from([xmin, ymin, xmax, ymax]: [f32; 4]) -> Self {
        Self::new(xmin, ymin, xmax, ymax)
    }
}

/// Parse a `[x1, y1, x2, y2, ..]` record. Extra values are ignored.
impl TryFrom<&[f32]> for BoundingBox {
    type Error = NmsError;

    fn try_from(coords: &[f32]) -> Result<Self, Self::Error> {
        match coords {
            [xmin, ymin, xmax, ymax, ..] => Ok(Self::new(*xmin, *ymin, *xmax, *ymax)),
            _ => Err(NmsError::InvalidInput {
                index: None,
                len: coords.len(),
            }),
        }
    }
}

/// Intersection area of two boxes divided by the smaller of their areas.
///
/// A small box fully inside a large one scores `1.0`. Returns `0.0` when the
/// smaller area is not positive.
pub fn overlap_over_min_area(b1: &BoundingBox, b2: &BoundingBox) -> f32 {
    let i_xmin = b1.xmin.max(b2.xmin);
    let i_ymin = b1.ymin.max(b2.ymin);
    let i_xmax = b1.xmax.min(b2.xmax);
    let i_ymax = b1.ymax.min(b2.ymax);
    let i_area = (i_xmax - i_xmin + 1.).max(0.) * (i_ymax - i_ymin + 1.).max(0.);

    let min_area = b1.area().min(b2.area());
    if min_area <= 0. {
        return 0.;
    }

    i_area / min_area
}
