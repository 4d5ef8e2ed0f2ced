use serde::{Deserialize, Serialize};

use super::{bounding_box::BoundingBox, error::NmsError};

/// Default overlap threshold above which a smaller box is suppressed.
pub const DEFAULT_OVERLAP_THRESHOLD: f32 = 0.5;

/// Area-based non-maximum suppression configuration struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NmsConfig {
    /// Boxes overlapping a kept box by more than this are suppressed.
    /// Any value is accepted.
    pub overlap_threshold: f32,
}

/// Default configuration for area-based non-maximum suppression.
impl Default for NmsConfig {
    fn default() -> Self {
        Self {
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
        }
    }
}

/// Area-based non-maximum suppression high level interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaNms {
    config: NmsConfig,
}

impl AreaNms {
    /// Create a new suppression engine.
    pub fn new(config: NmsConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &NmsConfig {
        &self.config
    }

    /// Suppress raw coordinate records, see [`nms_bbox_area`].
    pub fn suppress<B: AsRef<[f32]>>(&self, boxes: &[B]) -> Result<Vec<usize>, NmsError> {
        nms_bbox_area(boxes, self.config.overlap_threshold)
    }

    /// Suppress already parsed bounding boxes, see [`non_maximum_suppression_by_area`].
    pub fn suppress_boxes(&self, boxes: &[BoundingBox]) -> Vec<usize> {
        non_maximum_suppression_by_area(boxes, self.config.overlap_threshold)
    }
}

/// Non-maximum suppression over raw `[x1, y1, x2, y2]` records.
///
/// Every record is validated before any work is done: a record with fewer
/// than four coordinates fails with [`NmsError::InvalidInput`]. Extra values
/// in a record are ignored.
///
/// # Arguments
///
/// * `boxes` - The box records, one per candidate.
/// * `overlap_thresh` - The overlap threshold for suppression.
///
/// # Returns
///
/// The indices of the kept boxes, in selection order.
pub fn nms_bbox_area<B: AsRef<[f32]>>(
    boxes: &[B],
    overlap_thresh: f32,
) -> Result<Vec<usize>, NmsError> {
    if let Some((index, record)) = boxes
        .iter()
        .enumerate()
        .find(|(_, record)| record.as_ref().len() < 4)
    {
        let len = record.as_ref().len();
        tracing::warn!(index, len, "malformed box record");
        return Err(NmsError::InvalidInput {
            index: Some(index),
            len,
        });
    }

    let bboxes = boxes
        .iter()
        .map(|record| BoundingBox::try_from(record.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(non_maximum_suppression_by_area(&bboxes, overlap_thresh))
}

/// Non-maximum suppression preferring the largest boxes.
///
/// Boxes are visited largest area first. Each visited box is kept and a
/// remaining box carries over to the next round only when its overlap with
/// the kept box (see [`BoundingBox::overlap`]) is at most `overlap_thresh`
/// and its area is strictly larger than the kept box. Since the kept box is
/// always the largest remaining one, any non-empty input keeps a single box.
/// Equal areas keep their input order.
///
/// # Arguments
///
/// * `boxes` - The bounding boxes to suppress.
/// * `overlap_thresh` - The overlap threshold for suppression.
///
/// # Returns
///
/// The indices of the kept boxes, in selection order.
pub fn non_maximum_suppression_by_area(boxes: &[BoundingBox], overlap_thresh: f32) -> Vec<usize> {
    if boxes.is_empty() {
        return vec![];
    }

    let areas: Vec<f32> = boxes.iter().map(BoundingBox::area).collect();

    // Sort indices by area (descending), stable on ties
    let mut idxs: Vec<usize> = (0..boxes.len()).collect();
    idxs.sort_by(|&a, &b| areas[b].total_cmp(&areas[a]));

    let keep = suppress_in_order(boxes, &areas, idxs, overlap_thresh);

    tracing::debug!(
        num_boxes = boxes.len(),
        overlap_thresh,
        num_kept = keep.len(),
        "area nms done"
    );

    keep
}

/// Greedy selection over `idxs`, always picking the head of the list.
fn suppress_in_order(
    boxes: &[BoundingBox],
    areas: &[f32],
    mut idxs: Vec<usize>,
    overlap_thresh: f32,
) -> Vec<usize> {
    let mut keep = Vec::new();

    while let Some((&current, rest)) = idxs.split_first() {
        keep.push(current);

        let current_box = &boxes[current];
        let remaining: Vec<usize> = rest
            .iter()
            .copied()
            .filter(|&idx| {
                // only boxes larger than the pick carry over
                current_box.overlap(&boxes[idx]) <= overlap_thresh && areas[idx] > areas[current]
            })
            .collect();

        tracing::trace!(
            current,
            area = areas[current],
            remaining = remaining.len(),
            "kept box"
        );

        idxs = remaining;
    }

    keep
}
