use std::collections::BTreeSet;

use crate::value::Value;

/// Labels accepted when the document carries no usable `[categories]` taxonomy.
pub const FALLBACK_TYPES: [&str; 7] = [
    "bakery",
    "restaurant",
    "cafe",
    "bar",
    "bookstore",
    "bikeshop",
    "store",
];

/// Resolves the set of valid business `type` labels for `doc`.
///
/// Every `subcategories` key under every category counts. Category entries
/// that are not tables, or have no `subcategories` table, are skipped
/// silently. An empty result falls back to [`FALLBACK_TYPES`].
pub fn resolve_allowed_types(doc: &Value) -> BTreeSet<String> {
    let mut types = BTreeSet::new();
    if let Some(categories) = doc.get("categories").and_then(Value::as_table) {
        for category in categories.values() {
            if let Some(subcategories) = category.get("subcategories").and_then(Value::as_table) {
                types.extend(subcategories.keys().cloned());
            }
        }
    }

    if types.is_empty() {
        tracing::debug!("no usable categories, using fallback types");
        return FALLBACK_TYPES.iter().map(|t| t.to_string()).collect();
    }
    tracing::debug!(count = types.len(), "resolved types from categories");
    types
}
