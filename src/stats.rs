use serde_derive::{Deserialize, Serialize};

/// Side of the reference line the entity moved towards.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CrossingEvent {
    #[serde(rename = "ts")]
    pub timestamp: f32, // in seconds
    #[serde(rename = "dir")]
    pub direction: Direction,
}

/// Append-only log of crossing events for one run.
///
/// Insertion order is also timestamp order because frames are processed
/// strictly sequentially; nothing is ever removed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Statistics {
    events: Vec<CrossingEvent>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, timestamp: f32, direction: Direction) {
        self.events.push(CrossingEvent {
            timestamp,
            direction,
        });
    }

    #[inline]
    pub fn events(&self) -> &[CrossingEvent] {
        &self.events
    }

    pub fn up_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.direction == Direction::Up)
            .count()
    }

    pub fn down_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.direction == Direction::Down)
            .count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
