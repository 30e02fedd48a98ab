//! Display names for repository keys and crate paths.

/// Repository name from an `owner.repo` key.
///
/// Returns everything after the first dot, or an empty string when the key has
/// no dot.
pub fn repo_display_name(key: &str) -> &str {
    key.split_once('.').map(|(_, repo)| repo).unwrap_or("")
}

/// Crate name from a crate path: the last segment, ignoring one trailing `/`.
pub fn crate_display_name(path: &str) -> &str {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    trimmed
        .rsplit_once('/')
        .map(|(_, name)| name)
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_name_follows_first_dot() {
        assert_eq!(repo_display_name("facebook.react"), "react");
        assert_eq!(repo_display_name("rust-lang.rust.github.io"), "rust.github.io");
    }

    #[test]
    fn repo_name_without_dot_is_empty() {
        assert_eq!(repo_display_name("no-dot-string"), "");
        assert_eq!(repo_display_name(""), "");
    }

    #[test]
    fn crate_name_is_last_segment() {
        assert_eq!(crate_display_name("a/b/c"), "c");
        assert_eq!(crate_display_name("a/b/c/"), "c");
        assert_eq!(crate_display_name("serde-rs.serde/serde_derive/"), "serde_derive");
    }

    #[test]
    fn crate_name_without_slash_is_input() {
        assert_eq!(crate_display_name("single"), "single");
        assert_eq!(crate_display_name("single/"), "single");
    }
}
