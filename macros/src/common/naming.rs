// Identifier case conversion

/// Convert a snake_case function name to UpperCamelCase.
/// e.g., "left_is_zero" -> "LeftIsZero", "r#in_range" -> "InRange"
pub fn to_upper_camel_case(s: &str) -> String {
    let s = s.strip_prefix("r#").unwrap_or(s);
    let mut result = String::with_capacity(s.len());
    let mut upper_next = true;
    for c in s.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
