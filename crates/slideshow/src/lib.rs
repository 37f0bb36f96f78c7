//! Rotation state over a fixed deck of slides: auto-advance on a timer,
//! manual navigation (buttons, indicator dots, swipes), pause on hover.
//!
//! [`controller::SlideDeck`] is the pure state machine; [`rotation::Slideshow`]
//! drives it from a tokio interval and publishes rendered frames.

pub mod controller;
pub mod input;
pub mod rotation;

pub use controller::{Slide, SlideDeck, SlideFrame, SlideshowError};
pub use input::{SlideshowInput, SWIPE_THRESHOLD};
pub use rotation::{Slideshow, ROTATION_PERIOD};
