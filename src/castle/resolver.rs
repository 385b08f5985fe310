//! Item name resolution
//!
//! Maps what the player typed onto one of a set of candidate items.
//!
//! ## Matching
//! - Case-insensitive, whitespace-normalized
//! - Exact names win over partial ones
//! - Partial matches allowed: "key" matches "Rusty Key"
//! - Several partial matches are reported back as ambiguous

use crate::castle::errors::CastleError;
use crate::castle::types::ItemId;

/// Result of name resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResult {
    /// Single unambiguous match
    Found(ItemId),

    /// Multiple matches - player must clarify
    Ambiguous(Vec<ItemId>),

    /// No matches found
    NotFound,
}

impl ResolveResult {
    /// Collapse into a single item, mapping misses to `not_found`.
    pub fn into_item(self, not_found: impl FnOnce() -> CastleError) -> Result<ItemId, CastleError> {
        match self {
            ResolveResult::Found(item) => Ok(item),
            ResolveResult::Ambiguous(items) => Err(CastleError::Ambiguous(
                items.iter().map(|i| i.name().to_string()).collect(),
            )),
            ResolveResult::NotFound => Err(not_found()),
        }
    }
}

/// Normalize a name for comparison
///
/// - Convert to lowercase
/// - Collapse runs of whitespace to single spaces
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve `query` against `candidates`.
pub fn resolve_item(query: &str, candidates: &[ItemId]) -> ResolveResult {
    let query = normalize_name(query);
    if query.is_empty() {
        return ResolveResult::NotFound;
    }

    if let Some(exact) = candidates
        .iter()
        .find(|item| normalize_name(item.name()) == query)
    {
        return ResolveResult::Found(*exact);
    }

    let mut matches: Vec<ItemId> = candidates
        .iter()
        .copied()
        .filter(|item| normalize_name(item.name()).contains(&query))
        .collect();
    matches.dedup();

    match matches.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Found(matches[0]),
        _ => ResolveResult::Ambiguous(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_case_insensitive() {
        let room = [ItemId::RustyKey, ItemId::OldBook];
        assert_eq!(resolve_item("rusty key", &room), ResolveResult::Found(ItemId::RustyKey));
        assert_eq!(resolve_item("  OLD   book ", &room), ResolveResult::Found(ItemId::OldBook));
    }

    #[test]
    fn partial_match() {
        let room = [ItemId::RustyKey, ItemId::OldBook];
        assert_eq!(resolve_item("key", &room), ResolveResult::Found(ItemId::RustyKey));
        assert_eq!(resolve_item("sword", &room), ResolveResult::NotFound);
        assert_eq!(resolve_item("", &room), ResolveResult::NotFound);
    }

    #[test]
    fn shared_fragment_is_ambiguous() {
        let bag = [ItemId::Torch, ItemId::Note, ItemId::OldBook];
        assert_eq!(
            resolve_item("o", &bag),
            ResolveResult::Ambiguous(vec![ItemId::Torch, ItemId::Note, ItemId::OldBook])
        );
    }

    #[test]
    fn ambiguity_becomes_error_listing_names() {
        let err = ResolveResult::Ambiguous(vec![ItemId::Torch, ItemId::Note])
            .into_item(|| CastleError::NothingHere)
            .unwrap_err();
        assert_eq!(err.to_string(), "Which do you mean: Torch, Note?");
    }
}
