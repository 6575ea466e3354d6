//! Derive the `@handle` shown next to a display name.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

/// `"Ada Lovelace"` becomes `"@adalovelace"`.
pub fn handle(username: &str) -> String {
    let compact: String = username.chars().filter(|c| !c.is_whitespace()).collect();
    format!("@{}", compact.to_lowercase())
}
