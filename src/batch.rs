//! Batching of source texts for translation requests.
//!
//! Remote translation backends accept a bounded number of texts per call, so
//! an arbitrarily long list is sliced into fixed-size batches. Concatenating
//! the batches in order always reproduces the original list exactly; the
//! orchestrator relies on this to keep results index-aligned with sources.

/// Maximum texts per provider request unless overridden in configuration.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// What kind of content a batch carries; selects the instruction template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Plain,
    Html,
}

/// A bounded slice of source texts bound to one locale pair.
#[derive(Debug, Clone)]
pub struct TranslationBatch {
    /// Source texts, at most `max_batch_size` of them.
    pub texts: Vec<String>,
    /// Source locale.
    pub from: String,
    /// Target locale.
    pub to: String,
    /// Content kind of every text in the batch.
    pub kind: ContentKind,
}

impl TranslationBatch {
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Split source texts into batches of at most `max_batch_size` texts.
///
/// Every batch except possibly the last is exactly `max_batch_size` long;
/// the last holds the remainder. Empty input yields no batches.
///
/// # Panics
/// Panics if `max_batch_size` is 0.
pub fn split(
    texts: &[String],
    from: &str,
    to: &str,
    kind: ContentKind,
    max_batch_size: usize,
) -> Vec<TranslationBatch> {
    assert!(max_batch_size >= 1, "max_batch_size must be >= 1");

    texts
        .chunks(max_batch_size)
        .map(|chunk| TranslationBatch {
            texts: chunk.to_vec(),
            from: from.to_string(),
            to: to.to_string(),
            kind,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("text-{}", i)).collect()
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_split_empty_input_yields_no_batches() {
        let batches = split(&[], "en", "es", ContentKind::Plain, 50);
        assert!(batches.is_empty());
    }

    #[test]
    fn test_split_fewer_texts_than_batch_size() {
        let batches = split(&texts(3), "en", "es", ContentKind::Plain, 50);
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
    }

    #[test]
    fn test_split_exact_multiple() {
        let batches = split(&texts(100), "en", "es", ContentKind::Plain, 50);
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 50));
    }

    #[test]
    fn test_split_120_texts_into_50_50_20() {
        let input = texts(120);
        let batches = split(&input, "en", "es", ContentKind::Plain, 50);

        let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
        assert_eq!(sizes, vec![50, 50, 20]);

        let rejoined: Vec<String> = batches.iter().flat_map(|b| b.texts.clone()).collect();
        assert_eq!(rejoined, input);
    }

    #[test]
    fn test_split_batch_size_one() {
        let batches = split(&texts(3), "en", "es", ContentKind::Plain, 1);
        assert_eq!(batches.len(), 3);
        assert!(batches.iter().all(|b| b.len() == 1));
    }

    #[test]
    fn test_split_carries_locale_pair_and_kind() {
        let batches = split(&texts(1), "en", "pt-BR", ContentKind::Html, 50);
        assert_eq!(batches[0].from, "en");
        assert_eq!(batches[0].to, "pt-BR");
        assert_eq!(batches[0].kind, ContentKind::Html);
    }

    #[test]
    #[should_panic(expected = "max_batch_size")]
    fn test_split_zero_batch_size_panics() {
        split(&texts(1), "en", "es", ContentKind::Plain, 0);
    }

    // ==================== Concatenation Property ====================

    proptest! {
        #[test]
        fn prop_concatenation_reproduces_input(
            input in proptest::collection::vec(".*", 0..200),
            batch_size in 1usize..64,
        ) {
            let batches = split(&input, "en", "es", ContentKind::Plain, batch_size);

            // All but the last batch are full
            if let Some((last, rest)) = batches.split_last() {
                prop_assert!(rest.iter().all(|b| b.len() == batch_size));
                prop_assert!(last.len() >= 1 && last.len() <= batch_size);
            } else {
                prop_assert!(input.is_empty());
            }

            let rejoined: Vec<String> =
                batches.iter().flat_map(|b| b.texts.clone()).collect();
            prop_assert_eq!(rejoined, input);
        }
    }
}
