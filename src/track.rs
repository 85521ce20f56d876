use nalgebra as na;

/// A persistent identity assigned to one physical entity across frames.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: u64,

    /// Consecutive frames with no matched detection.
    pub disappeared: u32,

    /// Set once when a crossing event is emitted for this track;
    /// permanently suppresses further evaluation.
    pub counted: bool,

    // oldest first, never emptied
    history: Vec<na::Point2<i32>>,
}

impl Track {
    pub(crate) fn new(id: u64, centroid: na::Point2<i32>) -> Self {
        Self {
            id,
            disappeared: 0,
            counted: false,
            history: vec![centroid],
        }
    }

    pub(crate) fn push_centroid(&mut self, centroid: na::Point2<i32>) {
        self.history.push(centroid);
    }

    /// First ever recorded centroid; crossing tests compare against this
    /// entry-side position, not the previous frame.
    #[inline]
    pub fn first_centroid(&self) -> na::Point2<i32> {
        self.history[0]
    }

    #[inline]
    pub fn last_centroid(&self) -> na::Point2<i32> {
        self.history[self.history.len() - 1]
    }

    #[inline]
    pub fn history(&self) -> &[na::Point2<i32>] {
        &self.history
    }
}
