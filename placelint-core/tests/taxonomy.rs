use placelint_core::{parse_document_str, resolve_allowed_types, DocumentFormat, FALLBACK_TYPES};

fn allowed(toml: &str) -> Vec<String> {
    let parsed = parse_document_str(toml, DocumentFormat::Toml).unwrap();
    resolve_allowed_types(&parsed.document).into_iter().collect()
}

fn fallback() -> Vec<String> {
    let mut types: Vec<String> = FALLBACK_TYPES.iter().map(|t| t.to_string()).collect();
    types.sort();
    types
}

#[test]
fn absent_categories_use_fallback() {
    assert_eq!(allowed("title = \"x\""), fallback());
}

#[test]
fn empty_categories_use_fallback() {
    assert_eq!(allowed("[categories]"), fallback());
}

#[test]
fn subcategory_keys_are_unioned() {
    let types = allowed(
        r#"
[categories.food.subcategories]
cafe = "Cafe"
taqueria = "Taqueria"

[categories.shops.subcategories]
records = "Records"
cafe = "Cafe again"
"#,
    );
    assert_eq!(types, ["cafe", "records", "taqueria"]);
}

#[test]
fn malformed_categories_are_skipped() {
    let types = allowed(
        r#"
[categories]
stray = "not a table"
odd = { subcategories = ["list", "not", "table"] }

[categories.real.subcategories]
surf = "Surf shop"
"#,
    );
    assert_eq!(types, ["surf"]);
}

#[test]
fn categories_with_no_usable_subcategories_fall_back() {
    let types = allowed(
        r#"
[categories.food]
label = "Food"
"#,
    );
    assert_eq!(types, fallback());
}
