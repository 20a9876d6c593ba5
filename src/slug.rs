//! Title -> filesystem-safe stem
//!
//! Pure and deterministic: identical titles always yield identical slugs.
//! No collision detection; two titles slugging to the same value overwrite
//! one another (accepted hazard, see DESIGN.md).

/// Derive a filesystem-safe filename stem from an article title.
///
/// In order: lowercase, replace spaces with underscores, truncate to 50
/// characters, keep only alphanumerics and underscores, and substitute
/// `"blog"` if nothing survives. The `.md` extension is appended by the
/// caller.
pub fn slug(title: &str) -> String {
    let lowered = title.to_lowercase().replace(' ', "_");
    let filtered: String = lowered
        .chars()
        .take(50)
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    if filtered.is_empty() {
        "blog".to_string()
    } else {
        filtered
    }
}
