use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::stats::{Direction, Statistics};
use crate::tracker::CentroidTracker;
use crate::{Detector, Error, Frame, ShortTermTracker};

/// Per-run tuning. One config constructs one [`Pipeline`]; nothing here
/// changes mid-run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountConfig {
    /// Detection runs on frames `0, K, 2K, ...`; the cheaper short-term
    /// tracker covers the rest.
    pub detection_periodicity: u32,

    /// Horizontal reference line, as a fraction of frame height in `[0, 1]`.
    pub line_placement_ratio: f32,

    /// Consecutive unmatched frames a track survives before eviction.
    pub max_disappeared: u32,

    /// Association threshold as a fraction of the working frame height,
    /// scaled to pixels once per run from the first frame's aspect ratio.
    pub max_distance_height_ratio: f32,

    /// Working width frames are resized to before processing; height is
    /// derived from the aspect ratio, not configured.
    pub image_width: u32,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            detection_periodicity: 30,
            line_placement_ratio: 0.5,
            max_disappeared: 40,
            max_distance_height_ratio: 0.125,
            image_width: 500,
        }
    }
}

impl CountConfig {
    fn validate(&self) -> Result<(), Error> {
        if self.detection_periodicity == 0 {
            return Err(Error::Config(
                "detection_periodicity must be at least 1".into(),
            ));
        }

        if !self.line_placement_ratio.is_finite()
            || !(0.0..=1.0).contains(&self.line_placement_ratio)
        {
            return Err(Error::Config(format!(
                "line_placement_ratio must lie in [0, 1], got {}",
                self.line_placement_ratio
            )));
        }

        if !self.max_distance_height_ratio.is_finite() || self.max_distance_height_ratio <= 0.0 {
            return Err(Error::Config(format!(
                "max_distance_height_ratio must be positive, got {}",
                self.max_distance_height_ratio
            )));
        }

        if self.image_width == 0 {
            return Err(Error::Config("image_width must be at least 1".into()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Detecting,
    Tracking,
}

// Fixed on the first frame, once the working resolution is known.
struct RunState {
    tracker: CentroidTracker,
    line_y: f32,
}

/// Drives the detect/track hybrid loop for one video and derives
/// directional crossing events from track history.
///
/// Construct a fresh pipeline per run; identity state never crosses
/// runs. Frames must arrive strictly in order — the crossing test and
/// the disappearance counters are only correct sequentially.
pub struct Pipeline<I, D, S>
where
    D: Detector<I>,
    S: ShortTermTracker<I>,
{
    config: CountConfig,
    detector: D,
    short_term: S,
    handles: Vec<S::Handle>,
    state: Option<RunState>,
    frame_index: u64,
    stats: Statistics,
    _image: PhantomData<fn(&I)>,
}

impl<I, D, S> Pipeline<I, D, S>
where
    D: Detector<I>,
    S: ShortTermTracker<I>,
{
    /// Validates the config eagerly; no frame is touched on error.
    pub fn new(config: CountConfig, detector: D, short_term: S) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            config,
            detector,
            short_term,
            handles: Vec::new(),
            state: None,
            frame_index: 0,
            stats: Statistics::new(),
            _image: PhantomData,
        })
    }

    /// Consume an entire frame sequence and return the complete event
    /// log. A collaborator failure aborts the run and surfaces here.
    pub fn run(
        mut self,
        frames: impl IntoIterator<Item = Frame<I>>,
    ) -> Result<Statistics, Error> {
        for frame in frames {
            self.process_frame(&frame)?;
        }

        Ok(self.stats)
    }

    /// Feed one frame. Callers that drive frames themselves can stop at
    /// any point and keep [`Self::stats`] as a well-formed partial result.
    pub fn process_frame(&mut self, frame: &Frame<I>) -> Result<(), Error> {
        let phase = if self.frame_index % self.config.detection_periodicity as u64 == 0 {
            Phase::Detecting
        } else {
            Phase::Tracking
        };

        let boxes = match phase {
            Phase::Detecting => {
                let boxes = self.detector.detect(&frame.image)?;

                // detections become the new baseline for the short-term
                // trackers, one handle per box
                self.handles.clear();
                for &bbox in &boxes {
                    self.handles.push(self.short_term.init(&frame.image, bbox)?);
                }

                boxes
            }
            Phase::Tracking => {
                let mut boxes = Vec::with_capacity(self.handles.len());
                for handle in &mut self.handles {
                    boxes.push(self.short_term.update(handle, &frame.image)?);
                }

                boxes
            }
        };

        trace!(
            frame = self.frame_index,
            ?phase,
            boxes = boxes.len(),
            ts = frame.timestamp
        );

        let Self { config, state, stats, .. } = self;

        let state = match state {
            Some(state) => state,
            None => {
                let (fw, fh) = frame.dims;
                let line_y = config.line_placement_ratio * fh as f32;
                let max_distance = fh as f32 / fw as f32
                    * config.image_width as f32
                    * config.max_distance_height_ratio;

                debug!(line_y, max_distance, fw, fh, "run geometry fixed");

                state.insert(RunState {
                    tracker: CentroidTracker::new(config.max_disappeared, max_distance),
                    line_y,
                })
            }
        };

        state.tracker.update(&boxes);

        let line_y = state.line_y;
        for track in state.tracker.tracks_mut() {
            // a track seen for the first time has nothing to compare yet
            if track.history().len() < 2 || track.counted {
                continue;
            }

            let first_y = track.first_centroid().y as f32;
            let new_y = track.last_centroid().y as f32;

            if new_y < line_y && line_y <= first_y {
                debug!(id = track.id, ts = frame.timestamp, "up crossing");
                stats.record(frame.timestamp, Direction::Up);
                track.counted = true;
            } else if first_y <= line_y && line_y < new_y {
                debug!(id = track.id, ts = frame.timestamp, "down crossing");
                stats.record(frame.timestamp, Direction::Down);
                track.counted = true;
            }
        }

        self.frame_index += 1;

        Ok(())
    }

    /// Events emitted so far, for live reporting mid-run.
    #[inline]
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[inline]
    pub fn into_stats(self) -> Statistics {
        self.stats
    }
}
