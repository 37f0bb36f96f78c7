use crate::controller::{SlideDeck, SlideFrame, SlideshowError};

/// Horizontal travel (in presentation units) a touch must cover before it
/// counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Named input events the presentation layer feeds into the slideshow. One
/// dispatch point maps each of these to a controller method, keeping the
/// state machine free of any UI binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideshowInput {
    Next,
    Previous,
    GoTo(usize),
    PauseEnter,
    PauseLeave,
    /// End minus start of the horizontal touch coordinates; positive means
    /// the finger moved right.
    Swipe {
        delta: f32,
    },
}

impl SlideDeck {
    /// Dispatches a navigation input. Returns `None` for inputs that cause
    /// no navigation: pause events (handled by the rotation driver) and
    /// swipes at or below [`SWIPE_THRESHOLD`].
    pub fn navigate(
        &mut self,
        input: SlideshowInput,
    ) -> Result<Option<SlideFrame>, SlideshowError> {
        match input {
            SlideshowInput::Next => Ok(Some(self.next())),
            SlideshowInput::Previous => Ok(Some(self.previous())),
            SlideshowInput::GoTo(index) => self.go_to(index).map(Some),
            SlideshowInput::Swipe { delta } => {
                if delta.abs() <= SWIPE_THRESHOLD {
                    return Ok(None);
                }
                // A rightward swipe pulls the previous slide in.
                if delta > 0.0 {
                    Ok(Some(self.previous()))
                } else {
                    Ok(Some(self.next()))
                }
            }
            SlideshowInput::PauseEnter | SlideshowInput::PauseLeave => Ok(None),
        }
    }
}
