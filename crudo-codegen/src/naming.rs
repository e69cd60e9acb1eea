//! Case conversions for generated identifiers and paths.

/// Convert a string to camelCase (e.g., "Product" -> "product").
///
/// Only the first character changes; interior casing is preserved so
/// multi-word names like "OrderItem" become "orderItem".
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "product" -> "Product").
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to kebab-case (e.g., "OrderItem" -> "order-item").
///
/// Dashes are inserted at lowercase-to-uppercase boundaries, then the
/// whole string is lowercased.
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() && prev_lower {
            result.push('-');
        }
        prev_lower = c.is_lowercase();
        result.extend(c.to_lowercase());
    }
    result
}
