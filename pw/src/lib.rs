//! ProgressWalk - an iterator that reports its own progress to observers
//!
//! A [`TraversalSource`] walks a borrowed collection forward or backward.
//! After every step it recomputes the whole-percent completion and broadcasts
//! it to each attached [`Subscriber`], in attachment order, before yielding
//! the item.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use progresswalk::{Direction, HalfwayNotice, TraversalSource};
//!
//! let words = ["walk", "this", "way", "now"];
//! let mut source = TraversalSource::new(&words, Direction::Forward);
//! source.attach(Rc::new(HalfwayNotice::new()))?;
//! for word in source.by_ref() {
//!     println!("::{word}::");
//! }
//! ```

pub mod cli;
pub mod config;
pub mod demo;
mod direction;
mod error;
mod source;
mod subscriber;

pub use direction::{Direction, ParseDirectionError};
pub use error::WalkError;
pub use source::{SourceState, TraversalSource};
pub use subscriber::{
    AlmostDone, DEFAULT_ALMOST_DONE_THRESHOLD, DEFAULT_HALFWAY_BAND, HalfwayNotice, Progress, Subscriber,
};
