//! Per-language rule tables and their compiled runtime form.
//!
//! Each supported language ships one embedded TOML table describing its
//! detection signal, phrase boundaries, conjunction list, verb lexicon,
//! and case-suffix heuristics. Tables are validated and compiled into
//! [`LanguageProfile`]s once, then cached for the life of the process.
//! A table that fails to load makes its language unavailable; no other
//! language's rules are substituted for it.

pub(crate) mod config;
pub(crate) mod loader;
mod profile;

pub use config::LanguageTable;
pub use loader::profile;
pub use profile::LanguageProfile;
