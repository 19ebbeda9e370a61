//! High-level ADEXP message decoder

use crate::aggregate::MessageAggregator;
use crate::error::Result;
use crate::field::{DecodedField, FieldDecoder};
use crate::message::Message;
use crate::preprocess::Preprocessor;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// How logical lines are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Decode every line on the calling thread
    #[default]
    Sequential,
    /// Decode contiguous chunks of lines on scoped worker threads
    Parallel {
        /// Number of worker threads
        workers: NonZeroUsize,
    },
}

/// ADEXP message decoder
///
/// The result never depends on the strategy: fields are always aggregated in
/// source order and the reported error is the first one in that order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    /// Line decoding strategy
    pub strategy: Strategy,
}

impl Decoder {
    /// Create a new decoder
    pub fn new(strategy: Strategy) -> Self {
        Decoder { strategy }
    }

    /// Decode a raw ADEXP message
    pub fn decode(&self, raw: &str) -> Result<Message> {
        debug!(bytes = raw.len(), "decoding ADEXP message");

        let lines = Preprocessor::preprocess(raw)?;

        let message = match self.strategy {
            Strategy::Parallel { workers } if workers.get() > 1 && lines.len() > 1 => {
                MessageAggregator::aggregate(decode_parallel(&lines, workers.get()))?
            }
            _ => MessageAggregator::aggregate(
                lines.iter().map(|line| FieldDecoder::decode_line(line)),
            )?,
        };

        debug!(
            lines = lines.len(),
            title = %message.title,
            arcid = %message.arcid,
            route_points = message.route_points.len(),
            "decoded ADEXP message"
        );

        Ok(message)
    }
}

/// Decode lines on scoped threads, returning outcomes in line order
///
/// Each outcome lands in the arena slot of its line index. Once a line fails,
/// workers skip every line after the lowest failing index; lines before it are
/// always decoded, so aggregation meets the earliest error first. Skipped
/// slots stay empty and are dropped.
fn decode_parallel(lines: &[String], workers: usize) -> Vec<Result<Option<DecodedField>>> {
    let chunk_size = lines.len().div_ceil(workers);
    let first_failure = AtomicUsize::new(usize::MAX);

    let chunks: Vec<Vec<(usize, Result<Option<DecodedField>>)>> = std::thread::scope(|scope| {
        let handles: Vec<_> = lines
            .chunks(chunk_size)
            .enumerate()
            .map(|(chunk, slice)| {
                let first_failure = &first_failure;
                scope.spawn(move || {
                    let base = chunk * chunk_size;
                    let mut outcomes = Vec::with_capacity(slice.len());
                    for (offset, line) in slice.iter().enumerate() {
                        let index = base + offset;
                        if index > first_failure.load(Ordering::Acquire) {
                            break;
                        }
                        let outcome = FieldDecoder::decode_line(line);
                        if outcome.is_err() {
                            first_failure.fetch_min(index, Ordering::AcqRel);
                        }
                        outcomes.push((index, outcome));
                    }
                    outcomes
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let mut arena: Vec<Option<Result<Option<DecodedField>>>> = Vec::new();
    arena.resize_with(lines.len(), || None);
    for (index, outcome) in chunks.into_iter().flatten() {
        arena[index] = Some(outcome);
    }

    arena.into_iter().flatten().collect()
}

/// Builder for ADEXP decoders
pub struct DecoderBuilder {
    strategy: Strategy,
}

impl DecoderBuilder {
    /// Create a new decoder builder
    pub fn new() -> Self {
        DecoderBuilder {
            strategy: Strategy::Sequential,
        }
    }

    /// Set the line decoding strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Decode lines on `workers` threads, sequentially when zero
    pub fn with_workers(self, workers: usize) -> Self {
        let strategy = match NonZeroUsize::new(workers) {
            Some(workers) => Strategy::Parallel { workers },
            None => Strategy::Sequential,
        };
        self.with_strategy(strategy)
    }

    /// Build the decoder
    pub fn build(self) -> Decoder {
        Decoder::new(self.strategy)
    }
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a raw ADEXP message with the default sequential decoder
pub fn decode(raw: &str) -> Result<Message> {
    Decoder::default().decode(raw)
}
