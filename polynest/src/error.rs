use thiserror::Error;

pub type Result<T> = std::result::Result<T, NestError>;

/// Everything that can go wrong while preparing or running a nesting request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NestError {
    /// A polygon with fewer than 3 distinct vertices, no area, or an operation that produced an unusable shape.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// No non-overlapping position exists for a part and the configuration forbids the origin fallback.
    #[error("no valid placement found for part {part_id}")]
    PlacementExhausted { part_id: String },

    /// The sheet or the nesting configuration is unusable. Raised before any search starts.
    #[error("configuration error: {0}")]
    Configuration(String),
}
