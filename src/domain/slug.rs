//! Deterministic slug derivation from post titles.
//!
//! The transform is intentionally a two-pass replacement: symbol runs collapse
//! to a single hyphen first, then every remaining whitespace character becomes
//! its own hyphen. The ordering is observable — a punctuation run followed by
//! a space yields two adjacent hyphens — and downstream slugs depend on it, so
//! the passes must not be merged or reordered.

/// Derive a URL-safe slug from a free-text title.
///
/// Leading/trailing whitespace is trimmed and the input lowercased before the
/// two replacement passes run. Hyphens introduced at the edges by the symbol
/// pass are stripped so a trailing `!` does not leave a dangling separator.
/// An empty or whitespace-only title yields an empty slug rather than an
/// error; the form treats that as "no title entered yet".
pub fn slug_from_title(title: &str) -> String {
    let lowered = title.trim().to_lowercase();

    // Pass 1: each maximal run of characters that are neither ASCII
    // alphanumerics nor whitespace becomes a single hyphen.
    let mut collapsed = String::with_capacity(lowered.len());
    let mut in_symbol_run = false;
    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() || ch.is_whitespace() {
            collapsed.push(ch);
            in_symbol_run = false;
        } else if !in_symbol_run {
            collapsed.push('-');
            in_symbol_run = true;
        }
    }

    // Pass 2: every whitespace character becomes its own hyphen. Runs are
    // deliberately not collapsed here.
    let replaced: String = collapsed
        .chars()
        .map(|ch| if ch.is_whitespace() { '-' } else { ch })
        .collect();

    replaced.trim_matches('-').to_string()
}

/// Variant of [`slug_from_title`] tolerating an absent title.
///
/// Mirrors the form's seeding behavior: before the user has typed anything
/// there is no title value, and the slug stays empty.
pub fn slug_from_optional(title: Option<&str>) -> String {
    title.map(slug_from_title).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_title_becomes_hyphenated_lowercase() {
        assert_eq!(slug_from_title("Hello World!"), "hello-world");
    }

    #[test]
    fn empty_and_absent_titles_yield_empty_slugs() {
        assert_eq!(slug_from_title(""), "");
        assert_eq!(slug_from_title("   "), "");
        assert_eq!(slug_from_optional(None), "");
        assert_eq!(slug_from_optional(Some("Post")), "post");
    }

    #[test]
    fn outer_whitespace_is_trimmed_inner_spaces_each_become_hyphens() {
        // Whitespace runs are not collapsed by the second pass.
        assert_eq!(slug_from_title("  Multi   Spaces  "), "multi---spaces");
    }

    #[test]
    fn punctuation_then_space_leaves_adjacent_hyphens() {
        // Two-pass artifact: the symbol run and the following space each
        // contribute a hyphen.
        assert_eq!(slug_from_title("A! B"), "a--b");
        assert_eq!(slug_from_title("A!  B"), "a---b");
    }

    #[test]
    fn symbol_runs_collapse_to_one_hyphen() {
        assert_eq!(slug_from_title("C++/CLI"), "c-cli");
        assert_eq!(slug_from_title("what?!?is this"), "what-is-this");
    }

    #[test]
    fn non_ascii_letters_are_replaced() {
        // The `é` run collapses to a hyphen and the following space becomes
        // its own, the same artifact as a punctuation-then-space sequence.
        assert_eq!(slug_from_title("Café Crème"), "caf--cr-me");
    }

    #[test]
    fn output_alphabet_is_lowercase_alphanumerics_and_hyphens() {
        let inputs = [
            "Hello World!",
            "  Multi   Spaces  ",
            "A!  B",
            "基线对齐",
            "MIXED case 123",
            "--already-hyphenated--",
        ];
        for input in inputs {
            let slug = slug_from_title(input);
            assert!(
                slug.chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'),
                "slug `{slug}` from `{input}` contains characters outside the slug alphabet"
            );
        }
    }
}
