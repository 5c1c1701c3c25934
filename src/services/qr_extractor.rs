use regex::Regex;
use std::sync::LazyLock;

/// Six ASCII digits standing alone between ASCII word boundaries
static RE_INVENTORY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[0-9]{6}(?-u:\b)").unwrap());

/// Extract the first standalone six-digit inventory number from a decoded QR payload
pub fn extract_inventory_number(payload: &str) -> Option<&str> {
    RE_INVENTORY_NUMBER.find(payload).map(|m| m.as_str())
}

/// True when `value` is exactly six ASCII digits
pub fn is_inventory_number(value: &str) -> bool {
    value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit())
}
