pub mod bbox;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod stats;
pub mod tracker;

mod track;

pub use bbox::BBox;
pub use error::Error;
pub use frame::Frame;
pub use pipeline::{CountConfig, Pipeline};
pub use stats::{CrossingEvent, Direction, Statistics};
pub use track::Track;
pub use tracker::CentroidTracker;

/// Object-detection capability. Returns boxes in the frame's current
/// pixel space; invoked on every Kth frame only.
pub trait Detector<I> {
    fn detect(&mut self, image: &I) -> Result<Vec<BBox>, Error>;
}

/// Short-term single-object visual tracking capability, used to
/// interpolate positions between detector invocations.
///
/// A handle is seeded per detected box on a detection frame and updated
/// on every tracking frame until the next detection replaces the whole
/// baseline.
pub trait ShortTermTracker<I> {
    type Handle;

    fn init(&mut self, image: &I, bbox: BBox) -> Result<Self::Handle, Error>;

    fn update(&mut self, handle: &mut Self::Handle, image: &I) -> Result<BBox, Error>;
}
