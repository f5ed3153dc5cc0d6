//! # Collection Queries
//!
//! Types used by [`ResourceRequest::Find`](crate::ResourceRequest::Find) to select a slice
//! of a collection.

/// A `skip`/`limit` window over an id-ordered result. A `limit` of `0` means "everything
/// after `skip`".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    pub skip: usize,
    pub limit: usize,
}

impl Window {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }

    /// The whole result.
    pub fn all() -> Self {
        Self::default()
    }

    /// Applies the window to an already ordered iterator.
    pub fn apply<I: Iterator>(&self, iter: I) -> impl Iterator<Item = I::Item> {
        let take = if self.limit == 0 { usize::MAX } else { self.limit };
        iter.skip(self.skip).take(take)
    }
}

/// Result of a find: the windowed documents plus the number of matches before windowing.
#[derive(Debug, Clone, PartialEq)]
pub struct Found<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Found<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_is_unbounded() {
        let out: Vec<_> = Window::new(2, 0).apply(0..10).collect();
        assert_eq!(out, vec![2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_skip_past_end_is_empty() {
        let out: Vec<_> = Window::new(20, 5).apply(0..10).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn test_limit_truncates() {
        let out: Vec<_> = Window::new(1, 3).apply(0..10).collect();
        assert_eq!(out, vec![1, 2, 3]);
    }
}
