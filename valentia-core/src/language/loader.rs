//! Embedded language table loading and caching.
//!
//! All supported tables are embedded at compile time and compiled into
//! profiles on first access. A table that fails to parse, validate, or
//! compile leaves its language unavailable; lookups for it report
//! [`CoreError::LanguageUnavailable`] instead of borrowing another
//! language's rules.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::CoreError;
use crate::language::config::LanguageTable;
use crate::language::profile::LanguageProfile;
use crate::types::LanguageTag;

static REGISTRY: OnceLock<HashMap<LanguageTag, Arc<LanguageProfile>>> = OnceLock::new();

/// Embedded table sources, one per supported language.
const EMBEDDED: [(LanguageTag, &str); 3] = [
    (LanguageTag::Greek, include_str!("../../configs/languages/greek.toml")),
    (LanguageTag::Latin, include_str!("../../configs/languages/latin.toml")),
    (LanguageTag::English, include_str!("../../configs/languages/english.toml")),
];

/// Look up the compiled profile for a language.
pub fn profile(tag: LanguageTag) -> Result<Arc<LanguageProfile>, CoreError> {
    registry()
        .get(&tag)
        .cloned()
        .ok_or(CoreError::LanguageUnavailable(tag))
}

/// Available profiles in detection priority order.
pub(crate) fn profiles() -> Vec<Arc<LanguageProfile>> {
    let registry = registry();
    LanguageTag::ALL
        .iter()
        .filter_map(|tag| registry.get(tag).cloned())
        .collect()
}

fn registry() -> &'static HashMap<LanguageTag, Arc<LanguageProfile>> {
    REGISTRY.get_or_init(|| {
        let mut map = HashMap::new();
        for (tag, source) in EMBEDDED {
            match load_embedded(tag, source) {
                Ok(profile) => {
                    map.insert(tag, Arc::new(profile));
                }
                Err(error) => {
                    tracing::warn!(language = %tag, %error, "failed to load embedded language table");
                }
            }
        }
        map
    })
}

fn load_embedded(tag: LanguageTag, source: &str) -> Result<LanguageProfile, CoreError> {
    let table: LanguageTable = toml::from_str(source).map_err(|source| CoreError::TableParse {
        language: tag.code().to_string(),
        source,
    })?;
    LanguageProfile::from_table(tag, &table)
}
