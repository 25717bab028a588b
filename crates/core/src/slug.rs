//! URL-safe slug derivation for project names.

/// Derive a URL-safe slug from a display name.
///
/// Lowercases, maps runs of non-alphanumeric characters to a single `-`,
/// and trims leading/trailing dashes. The slug is derived once at project
/// creation and stays stable across renames.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true; // suppress a leading dash
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_name() {
        assert_eq!(slugify("My Project"), "my-project");
    }

    #[test]
    fn test_collapses_symbol_runs() {
        assert_eq!(slugify("Alpha -- Beta!!"), "alpha-beta");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(slugify("  (Staging) "), "staging");
    }

    #[test]
    fn test_already_slug() {
        assert_eq!(slugify("plain"), "plain");
    }
}
