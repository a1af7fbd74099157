//! Carousel controller and page behaviors for a landing page.
//!
//! The [`carousel::Carousel`] owns slide state, a single autoplay timer and a
//! drag tracker, and renders through the [`host::Host`] boundary. Time is
//! passed in explicitly, so the same controller runs under a browser event
//! loop, a game loop, or a test.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod host;
pub mod layout;
pub mod page;
pub mod slide;
pub mod state;
pub mod timer;

pub use carousel::{Carousel, Control, Environment, Key};
pub use config::{AppConfig, CarouselConfig, PresentationMode};
pub use error::{Error, Result};
