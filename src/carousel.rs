//! Gallery Carousel State
//!
//! Slide index plus play/pause state. Timers live in the component; this
//! only decides what the next state is.

/// Autoplay period
pub const AUTOPLAY_INTERVAL_MS: u32 = 3500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    playback: Playback,
}

impl Carousel {
    /// `None` for an empty gallery (no carousel)
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            index: 0,
            len,
            playback: Playback::Playing,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Autoplay tick
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Manual next; always resumes playing
    pub fn next(&mut self) {
        self.advance();
        self.playback = Playback::Playing;
    }

    /// Manual previous; always resumes playing
    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
        self.playback = Playback::Playing;
    }

    pub fn pointer_enter(&mut self) {
        self.playback = Playback::Paused;
    }

    pub fn pointer_leave(&mut self) {
        self.playback = Playback::Playing;
    }

    /// CSS transform for the slide track
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}
