//! Symbol names for packed shaders
use std::path::Path;

/// Derives the array name for a shader from its path.
///
/// Only the final path component is used.  Every run of characters outside
/// `[A-Za-z0-9]` becomes a single `_`, then the result is upper-cased, so
/// `shaders/triangle.vert` becomes `TRIANGLE_VERT`.
///
/// The result is not checked; it may be empty, start with a digit, or match
/// the name of another shader.  See [`is_valid_identifier`].
pub fn symbol_name(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    let mut out = String::with_capacity(base.len());
    let mut in_run = false;
    for c in base.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_uppercase());
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

/// Checks whether `name` is usable as a C identifier
///
/// Names produced by [`symbol_name`] only contain letters, digits, and
/// underscores, so this just rejects empty names and leading digits.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn name(s: &str) -> String {
        symbol_name(Path::new(s))
    }

    #[test]
    fn simple_names() {
        assert_eq!(name("triangle.vert"), "TRIANGLE_VERT");
        assert_eq!(name("line.geom"), "LINE_GEOM");
        assert_eq!(name("Text2.frag"), "TEXT2_FRAG");
    }

    #[test]
    fn runs_collapse() {
        assert_eq!(name("my-shader (v2).frag"), "MY_SHADER_V2_FRAG");
        assert_eq!(name("a...b"), "A_B");
        assert_eq!(name("_x_"), "_X_");
        assert_eq!(name("--"), "_");
    }

    #[test]
    fn directories_ignored() {
        assert_eq!(name("shaders/deep/dir/blit.comp"), "BLIT_COMP");
        assert_eq!(name("blit.comp"), "BLIT_COMP");
        assert_eq!(name("/abs/blit.comp"), "BLIT_COMP");
    }

    #[test]
    fn non_ascii_is_separator() {
        assert_eq!(name("caf\u{e9}.vert"), "CAF_VERT");
        assert_eq!(name("\u{e9}\u{e8}x"), "_X");
    }

    #[test]
    fn leading_digit_kept() {
        assert_eq!(name("2d.frag"), "2D_FRAG");
        assert!(!is_valid_identifier("2D_FRAG"));
    }

    #[test]
    fn identifiers() {
        assert!(is_valid_identifier("TRIANGLE_VERT"));
        assert!(is_valid_identifier("_"));
        assert!(is_valid_identifier("_1"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("9"));
    }
}
