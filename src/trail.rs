use std::collections::VecDeque;

use glam::DVec2;

/// Ordered history of the positions a body went through, oldest first.
///
/// A trail is unbounded by default and grows by one entry per simulation step. A limit can be set
/// with [`Trail::with_limit`], in which case the oldest positions are dropped once it is reached.
///
/// ```
/// # use orrery::trail::Trail;
/// # use glam::DVec2;
/// let mut trail = Trail::with_limit(2);
/// trail.push(DVec2::X);
/// trail.push(DVec2::Y);
/// trail.push(DVec2::ONE);
///
/// assert_eq!(trail.iter().copied().collect::<Vec<_>>(), vec![DVec2::Y, DVec2::ONE]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<DVec2>,
    limit: Option<usize>,
}

impl Trail {
    /// Creates an empty, unbounded trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trail keeping at most `limit` positions.
    ///
    /// A limit of zero is treated as one, since the latest position is always kept.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(limit.max(1)),
            limit: Some(limit.max(1)),
        }
    }

    /// Appends a position, dropping the oldest one if the limit is reached.
    #[inline]
    pub fn push(&mut self, position: DVec2) {
        if let Some(limit) = self.limit {
            while self.points.len() >= limit {
                self.points.pop_front();
            }
        }

        self.points.push_back(position);
    }

    /// Maximum number of kept positions, if any.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Number of stored positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no position was recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recently recorded position.
    #[inline]
    pub fn last(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    /// Iterates over the positions, oldest first.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DVec2> + ExactSizeIterator {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a DVec2;
    type IntoIter = std::collections::vec_deque::Iter<'a, DVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
