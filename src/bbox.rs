use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// Axis-aligned bounding box, left-top and right-bottom corners in
/// frame-pixel coordinates. A detection or short-term tracker update
/// produces a new box; boxes are never mutated in place.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox([i32; 4]);

impl BBox {
    #[inline]
    pub fn ltrb(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        BBox([x_min, y_min, x_max, y_max])
    }

    #[inline(always)]
    pub fn x_min(&self) -> i32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn y_min(&self) -> i32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn x_max(&self) -> i32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn y_max(&self) -> i32 {
        self.0[3]
    }

    #[inline(always)]
    pub fn width(&self) -> i32 {
        self.0[2] - self.0[0]
    }

    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.0[3] - self.0[1]
    }

    /// Geometric center, integer division.
    #[inline]
    pub fn centroid(&self) -> na::Point2<i32> {
        na::Point2::new((self.0[0] + self.0[2]) / 2, (self.0[1] + self.0[3]) / 2)
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32; 4] {
        &self.0
    }
}

impl From<BBox> for [i32; 4] {
    fn from(bbox: BBox) -> Self {
        bbox.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_rounds_down() {
        let b = BBox::ltrb(0, 0, 5, 5);
        assert_eq!(b.centroid(), nalgebra::Point2::new(2, 2));

        let b = BBox::ltrb(10, 20, 30, 40);
        assert_eq!(b.centroid(), nalgebra::Point2::new(20, 30));
    }

    #[test]
    fn zero_area_box_has_a_centroid() {
        let b = BBox::ltrb(7, 9, 7, 9);
        assert_eq!(b.centroid(), nalgebra::Point2::new(7, 9));
        assert_eq!(b.width(), 0);
        assert_eq!(b.height(), 0);
    }
}
