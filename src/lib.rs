//! Locale-set resolution and batched machine translation for i18n projects.
//!
//! The crate has two halves:
//!
//! - [`locales`]: validates locale identifiers against a syntactic grammar
//!   and expands raw command arguments ("all", delimited lists, the "base"
//!   alias) into ordered locale sets.
//! - [`orchestrator`] + [`translator`]: slices source texts into bounded
//!   batches, sends each batch through a pluggable [`translator::TranslationProvider`],
//!   and reassembles the results in source order while accounting progress.
//!
//! The reference provider talks to Anthropic models through the Amazon
//! Bedrock InvokeModel API (cargo feature `bedrock`, on by default).

pub mod batch;
pub mod config;
pub mod data;
pub mod error;
pub mod locales;
pub mod messages;
pub mod orchestrator;
pub mod progress;
pub mod retry;
pub mod translator;

pub use batch::{ContentKind, TranslationBatch, DEFAULT_BATCH_SIZE};
pub use error::TranslationError;
pub use locales::{validate_locale, LocaleResolver};
pub use orchestrator::Orchestrator;
pub use progress::ProgressCounter;
pub use translator::TranslationProvider;
