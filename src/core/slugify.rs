use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Separator used between slug segments.
pub const SLUG_SEPARATOR: char = '_';

fn non_alphanumeric_runs() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("Invalid regex pattern"))
}

/// Convert a project display name into a filesystem and identifier safe slug.
///
/// The name is lower-cased, every run of characters outside `[a-z0-9]` becomes a
/// single `_`, and leading/trailing separators are dropped. `"My Game!!"` becomes
/// `"my_game"`.
pub fn slugify(display_name: &str) -> Result<String> {
    let lowered = display_name.trim().to_lowercase();
    let replaced = non_alphanumeric_runs().replace_all(&lowered, "_");
    let slug = replaced.trim_matches(SLUG_SEPARATOR);

    if slug.is_empty() {
        return Err(Error::validation_invalid_argument(
            "name",
            "Project name must contain at least one alphanumeric character.",
            Some(display_name.to_string()),
        ));
    }

    Ok(slug.to_string())
}
