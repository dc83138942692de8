//! The walk-with-observers demonstration, independent of process arguments

use std::io::Write;
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::Config;
use crate::direction::Direction;
use crate::error::WalkError;
use crate::source::TraversalSource;
use crate::subscriber::{AlmostDone, HalfwayNotice, Subscriber};

/// What a finished demonstration walked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkSummary {
    pub words: usize,
    pub direction: Direction,
    pub final_percent: u8,
}

/// Split `text` into words and walk them with both observers attached
///
/// Echoes the text and the resolved direction (`forward`/`backward`, not the
/// raw command-line flag, which may be absent when config decides), attaches
/// [`HalfwayNotice`] then [`AlmostDone`], prints every word as `::word::` on
/// its own line after a blank one, and detaches both observers at the end.
pub fn run<W: Write>(text: &str, direction: Direction, config: &Config, out: &mut W) -> Result<WalkSummary, WalkError> {
    debug!(%direction, "demo::run: called");
    writeln!(out, "{}", text)?;
    writeln!(out, "{}", direction)?;

    let words: Vec<&str> = text.split_whitespace().collect();
    info!(words = words.len(), %direction, "Walking collection");

    let mut source = TraversalSource::with_output(&words, direction, &mut *out);

    let halfway: Rc<dyn Subscriber> = Rc::new(HalfwayNotice::with_band(config.halfway_band));
    let almost_done: Rc<dyn Subscriber> = Rc::new(AlmostDone::with_threshold(config.almost_done_threshold));
    source.attach(halfway.clone())?;
    source.attach(almost_done.clone())?;

    loop {
        let word = match source.step() {
            Ok(word) => word,
            Err(WalkError::Exhausted) => break,
            Err(e) => return Err(e),
        };
        writeln!(source.output_mut(), "\n::{}::", word)?;
    }

    source.detach(&halfway)?;
    source.detach(&almost_done)?;

    let summary = WalkSummary {
        words: words.len(),
        direction,
        final_percent: source.progress().percent,
    };
    debug!(?summary, "demo::run: finished");
    Ok(summary)
}
