use std::fmt;

use crate::error::{Result, SliceError};

/// The half-open range `[begin, end)` a view covers, in the coordinates of
/// the underlying store.
///
/// `Bounds` knows nothing about the data it describes. It only guarantees
/// `begin < end`, which means a view of length zero can never be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    begin: usize,
    end: usize,
}

impl Bounds {
    /// Creates the range `[begin, end)`.
    ///
    /// # Returns
    ///
    /// - `Ok(Bounds)`: when `begin < end`
    /// - `Err(SliceError::InvalidRange)`: when `begin >= end`
    pub fn new(begin: usize, end: usize) -> Result<Self> {
        if begin >= end {
            return Err(SliceError::InvalidRange {
                begin,
                end,
                reason: "begin must be smaller than end",
            });
        }
        Ok(Self { begin, end })
    }

    /// First index of the range in store coordinates.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// First index beyond the range in store coordinates.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of elements in the range. Never zero.
    pub fn len(&self) -> usize {
        // cannot underflow, begin < end
        self.end - self.begin
    }

    /// Always `false`, bounds are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Rejects an index relative to this range that lies outside of it.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(SliceError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Translates a sub-range given relative to this range into store
    /// coordinates.
    ///
    /// `sub_end == self.len()` is legal: it is the first element beyond the
    /// range. `sub_end == 0` is not, since the result would be empty.
    ///
    /// # Returns
    ///
    /// - `Ok(Bounds)`: the absolute bounds of the sub-range
    /// - `Err(SliceError::InvalidRange)`: when either bound reaches outside
    ///   of this range, or the sub-range is empty or reversed
    pub fn sub_bounds(&self, sub_begin: usize, sub_end: usize) -> Result<Self> {
        let out_of_range = SliceError::InvalidRange {
            begin: sub_begin,
            end: sub_end,
            reason: "sub-slice index out of range",
        };
        if sub_begin >= self.len() || sub_end > self.len() {
            return Err(out_of_range);
        }

        // both are at most len(), so adding begin stays at most end
        let begin = self.begin + sub_begin;
        let end = self.begin + sub_end;
        if end > self.end {
            return Err(out_of_range);
        }

        Self::new(begin, end).map_err(|_| SliceError::InvalidRange {
            begin: sub_begin,
            end: sub_end,
            reason: "begin must be smaller than end",
        })
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        let bounds = Bounds::new(1, 3).unwrap();
        assert_eq!(bounds.begin(), 1);
        assert_eq!(bounds.end(), 3);
        assert_eq!(bounds.len(), 2);
    }

    #[test]
    fn test_zero_length_rejected() {
        for n in [0, 1, 42, usize::MAX] {
            assert!(matches!(
                Bounds::new(n, n),
                Err(SliceError::InvalidRange { .. })
            ));
        }
    }

    #[test]
    fn test_reversed_rejected() {
        let err = Bounds::new(5, 2).unwrap_err();
        assert_eq!(
            err,
            SliceError::InvalidRange {
                begin: 5,
                end: 2,
                reason: "begin must be smaller than end",
            }
        );
    }

    #[test]
    fn test_check_index() {
        let bounds = Bounds::new(10, 13).unwrap();
        assert!(bounds.check_index(0).is_ok());
        assert!(bounds.check_index(2).is_ok());
        assert_eq!(
            bounds.check_index(3),
            Err(SliceError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_sub_bounds_translates() {
        let bounds = Bounds::new(10, 20).unwrap();
        let sub = bounds.sub_bounds(2, 5).unwrap();
        assert_eq!(sub, Bounds::new(12, 15).unwrap());
    }

    #[test]
    fn test_sub_bounds_end_is_inclusive_upper_limit() {
        let bounds = Bounds::new(10, 20).unwrap();
        let sub = bounds.sub_bounds(9, 10).unwrap();
        assert_eq!(sub.begin(), 19);
        assert_eq!(sub.end(), 20);
    }

    #[test]
    fn test_sub_bounds_rejects() {
        let bounds = Bounds::new(10, 20).unwrap();
        assert!(bounds.sub_bounds(0, 0).is_err());
        assert!(bounds.sub_bounds(10, 10).is_err());
        assert!(bounds.sub_bounds(0, 11).is_err());
        assert!(bounds.sub_bounds(4, 4).is_err());
        assert!(bounds.sub_bounds(6, 3).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Bounds::new(3, 7).unwrap().to_string(), "3..7");
    }
}
