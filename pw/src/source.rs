//! TraversalSource - an iterator that is also the subscriber registry
//!
//! Every successful step recomputes the completion percentage and pushes it
//! to all attached subscribers before the item is handed back.

use std::io::{self, Stdout, Write};
use std::iter::FusedIterator;
use std::ptr;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::direction::Direction;
use crate::error::WalkError;
use crate::subscriber::{Progress, Subscriber};

/// Lifecycle of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    /// The cursor still addresses an item
    Active,
    /// Every item has been yielded; terminal
    Exhausted,
}

/// Walks a borrowed slice in one direction, notifying subscribers as it goes
///
/// The source owns its subscriber list, so two sources never share
/// subscribers unless the same `Rc` is attached to both. Console lines
/// (attach/detach/broadcast and whatever subscribers write) go to `W`.
///
/// A source is single-use: once exhausted it stays exhausted.
pub struct TraversalSource<'a, T, W = Stdout> {
    items: &'a [T],
    direction: Direction,
    /// Forward: index of the next item. Backward: one past the next item.
    cursor: usize,
    subscribers: Vec<Rc<dyn Subscriber>>,
    last_progress: Progress,
    out: W,
}

impl<'a, T> TraversalSource<'a, T, Stdout> {
    /// Create a source that writes to stdout
    pub fn new(items: &'a [T], direction: Direction) -> Self {
        Self::with_output(items, direction, io::stdout())
    }
}

impl<'a, T, W: Write> TraversalSource<'a, T, W> {
    /// Create a source that writes its console lines to `out`
    pub fn with_output(items: &'a [T], direction: Direction, out: W) -> Self {
        debug!(len = items.len(), %direction, "TraversalSource::with_output: called");
        let cursor = match direction {
            Direction::Forward => 0,
            Direction::Backward => items.len(),
        };
        Self {
            items,
            direction,
            cursor,
            subscribers: Vec::new(),
            last_progress: Progress::compute(0, items.len(), direction),
            out,
        }
    }

    /// Yield the item under the cursor and advance
    ///
    /// Returns [`WalkError::Exhausted`] once every item has been yielded, and
    /// on every call after that. A failed broadcast ends the traversal: the
    /// error is returned and the source becomes exhausted.
    pub fn step(&mut self) -> Result<&'a T, WalkError> {
        let Some(index) = self.current_index() else {
            debug!("TraversalSource::step: exhausted");
            return Err(WalkError::Exhausted);
        };

        let items = self.items;
        let item = &items[index];
        match self.direction {
            Direction::Forward => self.cursor += 1,
            Direction::Backward => self.cursor -= 1,
        }

        self.last_progress = Progress::compute(self.visited(), self.items.len(), self.direction);
        debug!(
            %index,
            percent = self.last_progress.percent,
            "TraversalSource::step: advanced"
        );
        if let Err(e) = self.notify() {
            debug!(error = %e, "TraversalSource::step: notify failed, finishing");
            self.finish();
            return Err(e);
        }
        Ok(item)
    }

    /// Register a subscriber; the same subscriber may be attached more than once
    pub fn attach(&mut self, subscriber: Rc<dyn Subscriber>) -> Result<(), WalkError> {
        debug!(name = subscriber.name(), "TraversalSource::attach: called");
        writeln!(self.out, "Observer attached.")?;
        self.subscribers.push(subscriber);
        Ok(())
    }

    /// Remove the first registration of this exact subscriber instance
    pub fn detach<S: Subscriber + ?Sized>(&mut self, subscriber: &Rc<S>) -> Result<(), WalkError> {
        debug!(name = subscriber.name(), "TraversalSource::detach: called");
        let position = self
            .subscribers
            .iter()
            .position(|attached| ptr::addr_eq(Rc::as_ptr(attached), Rc::as_ptr(subscriber)));

        let Some(position) = position else {
            debug!(name = subscriber.name(), "TraversalSource::detach: not attached");
            return Err(WalkError::NotFound {
                name: subscriber.name().to_string(),
            });
        };

        self.subscribers.remove(position);
        writeln!(self.out, "Observer detached.")?;
        Ok(())
    }

    /// Push the current progress to every subscriber, in attachment order
    pub fn notify(&mut self) -> Result<(), WalkError> {
        debug!(
            subscribers = self.subscribers.len(),
            percent = self.last_progress.percent,
            "TraversalSource::notify: called"
        );
        writeln!(self.out, "Sending notifications to subscribers...")?;
        for subscriber in &self.subscribers {
            subscriber.update(&self.last_progress, &mut self.out)?;
        }
        Ok(())
    }

    /// Progress as of the last successful step
    pub fn progress(&self) -> Progress {
        self.last_progress
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> SourceState {
        if self.current_index().is_some() {
            SourceState::Active
        } else {
            SourceState::Exhausted
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Borrow the output sink, e.g. to interleave caller output with the transcript
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the source, handing back its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    fn current_index(&self) -> Option<usize> {
        match self.direction {
            Direction::Forward => (self.cursor < self.items.len()).then_some(self.cursor),
            Direction::Backward => self.cursor.checked_sub(1),
        }
    }

    fn visited(&self) -> usize {
        match self.direction {
            Direction::Forward => self.cursor,
            Direction::Backward => self.items.len() - self.cursor,
        }
    }

    fn finish(&mut self) {
        self.cursor = match self.direction {
            Direction::Forward => self.items.len(),
            Direction::Backward => 0,
        };
    }
}

impl<'a, T, W: Write> Iterator for TraversalSource<'a, T, W> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(item) => Some(item),
            Err(WalkError::Exhausted) => None,
            Err(e) => {
                warn!(error = %e, "TraversalSource::next: stopping early");
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.items.len() - self.visited()))
    }
}

impl<T, W: Write> FusedIterator for TraversalSource<'_, T, W> {}
