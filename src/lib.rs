#![deny(missing_docs)]

//! Area-based non-maximum suppression in Rust
//!
//! This crate collapses overlapping axis-aligned boxes into one representative
//! box each, preferring the largest box. Overlap is measured against the
//! smaller of the two boxes, so a box sitting inside a kept box is dropped.
//! Only boxes larger than the current pick carry over to the next round.
//!
//! # Examples
//!
//! ```
//! use kornia_nms::{AreaNms, NmsConfig};
//!
//! let nms = AreaNms::new(NmsConfig {
//!     overlap_threshold: 0.5,
//! });
//!
//! let boxes = vec![
//!     vec![2.0, 2.0, 4.0, 4.0],
//!     vec![0.0, 0.0, 10.0, 10.0],
//!     vec![20.0, 20.0, 25.0, 25.0],
//! ];
//!
//! let keep = nms.suppress(&boxes).expect("Failed to run nms");
//! assert_eq!(keep, vec![1]);
//! ```

/// Bounding box module with the overlap metric
mod bounding_box;

/// Error types
mod error;

/// Suppression engine
mod nms;

pub use bounding_box::{BoundingBox, overlap_over_min_area};
pub use error::NmsError;
pub use nms::{
    AreaNms, DEFAULT_OVERLAP_THRESHOLD, NmsConfig, nms_bbox_area, non_maximum_suppression_by_area,
};
