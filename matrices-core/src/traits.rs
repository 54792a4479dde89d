use std::fmt::Debug;

/// Anything with a rectangular extent.
/// A vector reports one extent, a matrix reports two (rows, columns).
pub trait Field: Debug {
    /// Returns the extent along each dimension.
    fn shape(&self) -> Vec<usize>;

    /// Returns the total number of elements.
    fn size(&self) -> usize {
        self.shape().iter().product()
    }

    /// Checks if the field holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
