//! Locale identifier validation and locale-set resolution.
//!
//! - `validator`: syntactic grammar check for a single locale token
//! - `resolver`: expands a raw locale argument ("all", delimited lists,
//!   the "base" alias) into an ordered set of validated locales

mod resolver;
mod validator;

pub use resolver::LocaleResolver;
pub use validator::validate_locale;
