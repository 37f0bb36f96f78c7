use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlideshowError {
    #[error("slide deck must contain at least one slide")]
    EmptyDeck,
    #[error("indicator count {indicators} does not match slide count {slides}")]
    IndicatorMismatch { slides: usize, indicators: usize },
    #[error("slide index {index} out of range for deck of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Content of one slide. The deck is fixed at construction and never grows
/// or shrinks afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub heading: String,
    pub body: String,
}

impl Slide {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// Rendered view of the deck: exactly one slide and one indicator dot are
/// active, both at `active`. `replay_animation` is set on frames produced by
/// navigation so the presentation layer re-runs the slide's entry animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideFrame {
    pub active: usize,
    pub slide_count: usize,
    pub replay_animation: bool,
}

impl SlideFrame {
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    pub fn active_markers(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.slide_count).map(|index| index == self.active)
    }
}

/// The slideshow state machine. The only mutable state is `current`, which
/// stays in `[0, len)` under every operation.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    current: usize,
}

impl SlideDeck {
    /// Builds a deck over `slides` with `indicator_count` dots. Fails when
    /// the deck is empty or the dot row does not line up with the slides.
    pub fn new(slides: Vec<Slide>, indicator_count: usize) -> Result<Self, SlideshowError> {
        if slides.is_empty() {
            return Err(SlideshowError::EmptyDeck);
        }
        if indicator_count != slides.len() {
            return Err(SlideshowError::IndicatorMismatch {
                slides: slides.len(),
                indicators: indicator_count,
            });
        }
        Ok(Self { slides, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn next(&mut self) -> SlideFrame {
        self.current = (self.current + 1) % self.slides.len();
        self.render()
    }

    pub fn previous(&mut self) -> SlideFrame {
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
        self.render()
    }

    /// Jumps to `index`. Out-of-range indices are rejected rather than
    /// written through unchecked.
    pub fn go_to(&mut self, index: usize) -> Result<SlideFrame, SlideshowError> {
        if index >= self.slides.len() {
            return Err(SlideshowError::IndexOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.current = index;
        Ok(self.render())
    }

    fn render(&self) -> SlideFrame {
        SlideFrame {
            active: self.current,
            slide_count: self.slides.len(),
            replay_animation: true,
        }
    }

    /// Current view without navigating; does not replay the entry animation.
    pub fn current_frame(&self) -> SlideFrame {
        SlideFrame {
            replay_animation: false,
            ..self.render()
        }
    }
}
