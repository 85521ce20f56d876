use std::collections::BTreeMap;

use nalgebra as na;
use ndarray::Array2;
use tracing::debug;

use crate::bbox::BBox;
use crate::track::Track;

/// Identity assignment over box centroids.
///
/// Owns every live [`Track`] for the duration of one run. Matching is
/// greedy nearest-neighbor, resolved independently per existing track:
/// two tracks may claim the same input centroid in degenerate
/// configurations, and that is left as-is rather than resolved to a
/// bipartite optimum.
pub struct CentroidTracker {
    next_id: u64,
    tracks: BTreeMap<u64, Track>,
    max_disappeared: u32,
    max_distance: f32,
}

fn euclidean(a: na::Point2<i32>, b: na::Point2<i32>) -> f32 {
    na::distance(
        &na::Point2::new(a.x as f32, a.y as f32),
        &na::Point2::new(b.x as f32, b.y as f32),
    )
}

impl CentroidTracker {
    /// `max_distance` must arrive pre-scaled to the working resolution;
    /// no scaling happens here.
    pub fn new(max_disappeared: u32, max_distance: f32) -> Self {
        Self {
            next_id: 0,
            tracks: BTreeMap::new(),
            max_disappeared,
            max_distance,
        }
    }

    fn register(&mut self, centroid: na::Point2<i32>) {
        let id = self.next_id;
        self.next_id += 1;

        debug!(id, x = centroid.x, y = centroid.y, "track registered");
        self.tracks.insert(id, Track::new(id, centroid));
    }

    fn evict_overdue(&mut self) {
        let max_disappeared = self.max_disappeared;

        self.tracks.retain(|id, track| {
            let keep = track.disappeared <= max_disappeared;
            if !keep {
                debug!(id, missed = track.disappeared, "track evicted");
            }
            keep
        });
    }

    /// Feed one frame's boxes; the live set after matching, registration
    /// and eviction is reachable through [`Self::tracks`].
    pub fn update(&mut self, boxes: &[BBox]) {
        if boxes.is_empty() {
            for track in self.tracks.values_mut() {
                track.disappeared += 1;
            }
            self.evict_overdue();
            return;
        }

        let centroids: Vec<na::Point2<i32>> = boxes.iter().map(BBox::centroid).collect();

        if self.tracks.is_empty() {
            for &c in &centroids {
                self.register(c);
            }
            return;
        }

        let existing: Vec<na::Point2<i32>> =
            self.tracks.values().map(Track::last_centroid).collect();

        let dist = Array2::from_shape_fn((existing.len(), centroids.len()), |(r, c)| {
            euclidean(existing[r], centroids[c])
        });

        let mut claimed = vec![false; centroids.len()];

        for (row, track) in self.tracks.values_mut().enumerate() {
            let mut nearest = 0;
            let mut nearest_dist = f32::INFINITY;

            for (col, &d) in dist.row(row).iter().enumerate() {
                if d < nearest_dist {
                    nearest = col;
                    nearest_dist = d;
                }
            }

            if nearest_dist <= self.max_distance {
                claimed[nearest] = true;
                track.push_centroid(centroids[nearest]);
                track.disappeared = 0;
            } else {
                track.disappeared += 1;
            }
        }

        self.evict_overdue();

        for (col, &c) in centroids.iter().enumerate() {
            if !claimed[col] {
                self.register(c);
            }
        }
    }

    /// Live tracks in id order.
    #[inline]
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    #[inline]
    pub fn tracks_mut(&mut self) -> impl Iterator<Item = &mut Track> {
        self.tracks.values_mut()
    }

    #[inline]
    pub fn get(&self, id: u64) -> Option<&Track> {
        self.tracks.get(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
