//! Filename sanitization for storage keys.
//!
//! Given any client-supplied string, produce a filesystem-safe,
//! non-path-traversing key. May return an empty string for empty or
//! all-unsafe input; callers must re-check before using the result.

/// Sanitize an untrusted filename into a storage key.
///
/// Path separators become word breaks, runs of whitespace collapse to a
/// single `_`, and anything outside `[A-Za-z0-9._-]` is dropped. Leading
/// and trailing `.` / `_` are stripped so `..` sequences cannot survive.
///
/// Non-ASCII characters are dropped rather than transliterated (`ä` is
/// removed, not folded to `a`), so accented names lose those letters.
pub fn sanitize_key(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '/' | '\\' => cleaned.push(' '),
            c if c.is_ascii_alphanumeric() => cleaned.push(c),
            '.' | '_' | '-' | ' ' => cleaned.push(ch),
            _ => {}
        }
    }

    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    joined.trim_matches(['.', '_']).to_string()
}

#[cfg(test)]
mod tests {
    use super::sanitize_key;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(sanitize_key("report.pdf"), "report.pdf");
        assert_eq!(sanitize_key("Photo-2024_final.JPG"), "Photo-2024_final.JPG");
    }

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(sanitize_key("my file.txt"), "my_file.txt");
        assert_eq!(sanitize_key("  padded  name.txt  "), "padded_name.txt");
    }

    #[test]
    fn path_separators_are_stripped() {
        assert_eq!(sanitize_key("etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_key("..\\..\\boot.ini"), "boot.ini");
        assert_eq!(sanitize_key("../../etc/passwd"), "etc_passwd");
    }

    #[test]
    fn unsafe_characters_are_dropped() {
        assert_eq!(sanitize_key("inv@oice#2024!.pdf"), "invoice2024.pdf");
    }

    #[test]
    fn non_ascii_characters_are_dropped_not_transliterated() {
        assert_eq!(sanitize_key("résumé.pdf"), "rsum.pdf");
        assert_eq!(sanitize_key("日本語.txt"), "txt");
    }

    #[test]
    fn leading_dots_are_trimmed() {
        assert_eq!(sanitize_key(".hidden"), "hidden");
        assert_eq!(sanitize_key("..."), "");
    }

    #[test]
    fn empty_and_all_unsafe_input_yield_empty() {
        assert_eq!(sanitize_key(""), "");
        assert_eq!(sanitize_key("///"), "");
        assert_eq!(sanitize_key("@#$%"), "");
    }
}
