//! Category label helpers.
//!
//! The catalog identifies categories by free-form labels such as
//! `"men's clothing"`; there is no category record of its own.

/// Whether a category selection means "no category filter".
pub fn is_all_categories(label: &str) -> bool {
    label.is_empty() || label == "all"
}

/// Label shown in the category list (apostrophes stripped).
pub fn display_category(label: &str) -> String {
    label.replacen('\'', "", 1)
}

/// Heading for the listing page: the selected category with its first
/// letter upper-cased, or "All Products".
pub fn category_heading(selected: Option<&str>) -> String {
    match selected {
        Some(label) if !is_all_categories(label) => {
            let mut chars = label.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => "All Products".to_string(),
    }
}
