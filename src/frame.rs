/// A single timestamped frame handed to the pipeline.
///
/// `image` is opaque to the core; only the detector and short-term
/// tracker capabilities look inside it. `dims` is the working
/// resolution the frame was resized to, in pixels.
pub struct Frame<I> {
    pub image: I,
    pub dims: (u32, u32),
    pub timestamp: f32, // in seconds
}

impl<I> Frame<I> {
    #[inline]
    pub fn new(image: I, dims: (u32, u32), timestamp: f32) -> Self {
        Self {
            image,
            dims,
            timestamp,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.1
    }
}
