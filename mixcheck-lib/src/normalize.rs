/// Trim surrounding whitespace and lowercase a chemical name.
///
/// Total: an all-whitespace input normalizes to the empty string.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
