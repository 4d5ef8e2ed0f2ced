/// Non-maximum suppression error enum.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NmsError {
    /// A box record carried fewer than four coordinates.
    #[error("each box must have at least four coordinates: [x1, y1, x2, y2] (got {len})")]
    InvalidInput {
        /// Position of the malformed record, when parsed as part of a collection.
        index: Option<usize>,
        /// Number of coordinates the record carried.
        len: usize,
    },
}
