//! Size-bounded batch execution with a configurable failure policy.

use std::future::Future;

/// Maximum records per batch request accepted by the API.
pub const MAX_CHUNK_SIZE: usize = 60;

/// What to do when a chunk fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort after the first failing chunk; later chunks are never sent.
    #[default]
    Stop,
    /// Record the failure and keep submitting the remaining chunks.
    Continue,
}

/// Options for a batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Requested chunk size; 0 or negative means "use the maximum".
    pub chunk_size: i64,
    pub policy: FailurePolicy,
}

impl BatchOptions {
    /// The chunk size actually used: clamped to `1..=MAX_CHUNK_SIZE`,
    /// defaulting to the maximum when unset.
    pub fn effective_chunk_size(&self) -> usize {
        if self.chunk_size <= 0 {
            MAX_CHUNK_SIZE
        } else {
            (self.chunk_size as usize).min(MAX_CHUNK_SIZE)
        }
    }
}

/// Result of a batch run: how many records went through, and one message
/// per failed chunk, in order.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub errors: Vec<String>,
}

impl BatchOutcome {
    /// True when every chunk was submitted successfully.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Split `items` into contiguous chunks and submit each in order.
///
/// On a chunk failure the error message records the 1-based record range
/// of that chunk. Under [`FailurePolicy::Stop`] the run halts right there,
/// so `succeeded` counts only records in chunks strictly before the
/// failure.
pub async fn run_chunks<T, F, Fut, E>(
    items: &[T],
    opts: &BatchOptions,
    mut submit: F,
) -> BatchOutcome
where
    T: Clone,
    F: FnMut(Vec<T>) -> Fut,
    Fut: Future<Output = std::result::Result<(), E>>,
    E: std::fmt::Display,
{
    let chunk_size = opts.effective_chunk_size();
    let mut outcome = BatchOutcome::default();

    for (index, chunk) in items.chunks(chunk_size).enumerate() {
        let start = index * chunk_size + 1;
        let end = index * chunk_size + chunk.len();

        match submit(chunk.to_vec()).await {
            Ok(()) => outcome.succeeded += chunk.len(),
            Err(err) => {
                outcome.errors.push(format!("records {start}-{end}: {err}"));
                if opts.policy == FailurePolicy::Stop {
                    break;
                }
            }
        }
    }

    outcome
}
