/// Specialized `Result` type for view operations.
pub type Result<T> = std::result::Result<T, SliceError>;

/// Errors that can occur when constructing or accessing a view.
///
/// Every error aborts only the offending operation. A view's bounds never
/// change after construction, so a failed call leaves the view untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SliceError {
    /// Returned when a range is empty or reversed, when a sub-slice reaches
    /// outside the current view, or when a container view would extend past
    /// the end of its store.
    ///
    /// # Fields
    ///
    /// - `begin`, `end`: the offending range, in the coordinates it was given in
    /// - `reason`: which check rejected it
    #[error("Invalid range {begin}..{end}: {reason}")]
    InvalidRange {
        begin: usize,
        end: usize,
        reason: &'static str,
    },

    /// Returned when an element access uses an index at or beyond the length
    /// of the view.
    #[error("Index {index} is outside of the slice of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Returned when a pointer view is constructed from a null pointer.
    #[error("Pointer must not be null")]
    NullPointer,
}
