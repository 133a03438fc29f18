use thiserror::Error;

/// A filter bound that can never select anything meaningful.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("{axis} range is inverted: min {min} > max {max}")]
    InvertedRange { axis: &'static str, min: f64, max: f64 },

    #[error("{axis} bound is not a finite number")]
    NonFinite { axis: &'static str },
}

/// Rejected annotation input. Nothing is persisted when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}
