//! Translation orchestration: batching, dispatch, and result reassembly.
//!
//! Batches are processed strictly in order on the calling task. Ordering is a
//! correctness invariant, not cosmetics: result indices are aligned
//! positionally with source indices, so the accumulator must grow in batch
//! order. A failed batch aborts the run with no partial output.

use crate::batch::{self, ContentKind};
use crate::error::TranslationError;
use crate::progress::ProgressCounter;
use crate::translator::TranslationProvider;
use tracing::{debug, info};

/// Drives the translation pipeline over a provider.
pub struct Orchestrator<'a> {
    provider: &'a dyn TranslationProvider,
    max_batch_size: usize,
    progress: ProgressCounter,
}

impl<'a> Orchestrator<'a> {
    /// # Panics
    /// Panics if `max_batch_size` is 0.
    pub fn new(provider: &'a dyn TranslationProvider, max_batch_size: usize) -> Self {
        assert!(max_batch_size >= 1, "max_batch_size must be >= 1");
        Self {
            provider,
            max_batch_size,
            progress: ProgressCounter::new(0),
        }
    }

    /// Progress of the most recent `translate_all` run.
    pub fn progress(&self) -> &ProgressCounter {
        &self.progress
    }

    /// Translate all texts from `from` to `to`, in order.
    ///
    /// Texts are sliced into batches of at most `max_batch_size`; each batch
    /// is one provider round trip. A provider failure or a result count that
    /// does not match its batch aborts the run immediately; no strings from
    /// the failed or later batches are returned.
    pub async fn translate_all(
        &mut self,
        texts: &[String],
        from: &str,
        to: &str,
        kind: ContentKind,
    ) -> Result<Vec<String>, TranslationError> {
        self.progress = ProgressCounter::new(texts.len());

        let batches = batch::split(texts, from, to, kind, self.max_batch_size);
        debug!(
            "translating {} texts {} -> {} in {} batches",
            texts.len(),
            from,
            to,
            batches.len()
        );

        let mut results = Vec::with_capacity(texts.len());
        for batch in &batches {
            let translations = self.provider.translate(batch).await?;

            // Index alignment depends on every batch keeping its count.
            if translations.len() != batch.len() {
                return Err(TranslationError::provider(format!(
                    "Provider returned {} translations for a batch of {}",
                    translations.len(),
                    batch.len()
                )));
            }

            self.progress.advance(translations.len());
            results.extend(translations);
        }

        if results.is_empty() && !texts.is_empty() {
            return Err(TranslationError::NoResults);
        }

        info!(
            "translated {} texts {} -> {}",
            results.len(),
            from,
            to
        );
        Ok(results)
    }
}
