use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Wrapping slide index. A carousel with no slides stays at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn forward(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn back(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub image: &'static str,
    pub caption: &'static str,
}

static HERO_SLIDES: &[Slide] = &[
    Slide {
        image: "/assets/hero/bridge.svg",
        caption: "Keeping critical infrastructure open while we strengthen it.",
    },
    Slide {
        image: "/assets/hero/timber.svg",
        caption: "Low-carbon structures that still span the distance.",
    },
    Slide {
        image: "/assets/hero/plant.svg",
        caption: "Energy upgrades that pay for themselves.",
    },
];

pub fn hero_slides() -> &'static [Slide] {
    HERO_SLIDES
}
