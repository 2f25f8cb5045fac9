//! The per-hand loop: read a block, parse it, convert it, write it.
//!
//! A hand that fails to parse costs one diagnostic line and is skipped.
//! Only failures of the streams themselves end the run early.
use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use tracing::{debug, instrument};

use crate::{
    config::ConverterConfig,
    errors::{HandError, Result},
    hand::{ParsedHand, RawHand},
    segment::{HandHistoryReader, RawBlock},
};

/// Counts of hands seen during a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RunSummary {
    /// Every non-empty block read from the input
    pub hands: usize,
    /// Blocks that were rejected
    pub errors: usize,
}

impl RunSummary {
    /// Hands that made it to the output.
    pub fn converted(&self) -> usize {
        self.hands - self.errors
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hands, {} errors", self.hands, self.errors)
    }
}

/// Converts hand history exports with a fixed configuration.
#[derive(Debug, Clone)]
pub struct HandConverter {
    config: ConverterConfig,
}

impl HandConverter {
    /// Create a converter, rejecting an invalid configuration up front.
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Parse and convert a single hand block.
    pub fn convert_block(&self, block: RawBlock) -> std::result::Result<String, HandError> {
        let hand = ParsedHand::from_raw(RawHand::new(block), &self.config)?;
        debug!(id = hand.id(), network = ?hand.network(), "Converted hand");
        Ok(hand.render(&self.config))
    }

    /// Convert every hand `reader` yields.
    ///
    /// Converted hands go to `out`. Each rejected hand writes one line to
    /// `diag`. The summary is returned rather than written so the caller
    /// decides where it goes.
    #[instrument(level = "debug", skip_all)]
    pub fn run<R, W, D>(
        &self,
        reader: &mut HandHistoryReader<R>,
        out: &mut W,
        diag: &mut D,
    ) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write,
        D: Write,
    {
        let mut summary = RunSummary::default();
        while let Some(block) = reader.next_block()? {
            summary.hands += 1;
            match self.convert_block(block) {
                Ok(text) => out.write_all(text.as_bytes())?,
                Err(err) => {
                    summary.errors += 1;
                    debug!(id = err.id(), error = %err.kind, "Rejected hand");
                    writeln!(diag, "{err}")?;
                }
            }
        }
        out.flush()?;
        diag.flush()?;

        debug!(hands = summary.hands, errors = summary.errors, "Finished run");
        Ok(summary)
    }

    pub fn convert_reader<R, W, D>(
        &self,
        input: R,
        out: &mut W,
        diag: &mut D,
    ) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write,
        D: Write,
    {
        self.run(&mut HandHistoryReader::new(input), out, diag)
    }

    /// Open `path` as UTF-8 text and convert it.
    pub fn convert_file<W, D>(
        &self,
        path: &Path,
        out: &mut W,
        diag: &mut D,
    ) -> Result<RunSummary>
    where
        W: Write,
        D: Write,
    {
        debug!(?path, "Opening hand history");
        let file = File::open(path)?;
        self.convert_reader(BufReader::new(file), out, diag)
    }
}
