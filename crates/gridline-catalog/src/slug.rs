//! Slug generation from display names.

/// Normalize a display name into an identifier-safe slug.
///
/// Lower-cases, strips characters outside the word/space/hyphen classes
/// (alphanumerics and underscore survive), collapses runs of spaces and
/// hyphens into a single hyphen, and trims leading/trailing hyphens.
///
/// Deterministic and idempotent. Not reversible; distinct inputs can
/// collide — callers resolve collisions, the generator never does.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
        // other punctuation is stripped without acting as a separator
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        assert_eq!(slugify("Portal 2"), "portal-2");
    }

    #[test]
    fn apostrophe_stripped() {
        assert_eq!(slugify("Baldur's Gate 3"), "baldurs-gate-3");
    }

    #[test]
    fn punctuation_stripped() {
        assert_eq!(slugify("S.T.A.L.K.E.R. 2"), "stalker-2");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(slugify("Half - Life  --  2"), "half-life-2");
    }

    #[test]
    fn leading_trailing_trimmed() {
        assert_eq!(slugify("  -- Anno 1800 -- "), "anno-1800");
    }

    #[test]
    fn underscore_survives() {
        assert_eq!(slugify("game_name"), "game_name");
    }

    #[test]
    fn empty_input() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn punctuation_only() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn idempotent() {
        for input in ["Baldur's Gate 3", "S.T.A.L.K.E.R. 2", "Half - Life 2"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(slugify("Cyberpunk 2077"), slugify("Cyberpunk 2077"));
    }
}
