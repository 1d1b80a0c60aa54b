//! Display-name ⇄ identifier escape codec.
//!
//! Module display names are free-form user text; identifiers must be safe
//! for use as lookup keys and file-path segments and must not collide
//! (`"A B"` and `"A_B"` encode differently). Characters outside
//! `[A-Za-z0-9_]` are escaped: a space becomes `__`, anything else becomes
//! `_<scalar>_` with the character's Unicode scalar value in decimal.
//!
//! Decoding distinguishes a real `_<scalar>_` escape from digits sitting
//! inside a space-run by counting the contiguous underscores ending at the
//! match: an odd run means escape, an even run means the leading underscore
//! belongs to space escapes. The heuristic misclassifies adversarial names
//! (a literal `_7_`, or two escaped characters back to back); that ambiguity
//! is kept for compatibility with the existing on-disk naming contract and
//! pinned by tests below rather than fixed.

use std::sync::LazyLock;

use regex::Regex;

static ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_[0-9]+_").unwrap());

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Encode a display name into a path-safe identifier.
///
/// Total: every string is encodable, and the empty string encodes to itself.
pub fn encode(display: &str) -> String {
    let mut out = String::with_capacity(display.len());
    for c in display.chars() {
        if is_safe(c) {
            out.push(c);
        } else if c == ' ' {
            out.push_str("__");
        } else {
            out.push('_');
            out.push_str(&(c as u32).to_string());
            out.push('_');
        }
    }
    out
}

/// Decode an identifier back into its display name.
///
/// Escapes are resolved rightmost-first so earlier match positions stay
/// valid while the string shrinks. A match whose underscore run is even is
/// skipped (it sits inside a space-run); an unparsable or invalid scalar
/// value is also skipped and the text kept verbatim. Remaining `__` pairs
/// become single spaces.
pub fn decode(ident: &str) -> String {
    let mut out = ident.to_owned();
    let matches: Vec<(usize, usize)> = ESCAPE_PATTERN
        .find_iter(ident)
        .map(|m| (m.start(), m.end()))
        .collect();

    for &(start, end) in matches.iter().rev() {
        if underscore_run(&out, start) % 2 == 0 {
            continue;
        }
        let digits = &out[start + 1..end - 1];
        if let Some(c) = digits.parse::<u32>().ok().and_then(char::from_u32) {
            out.replace_range(start..end, c.encode_utf8(&mut [0u8; 4]));
        }
    }

    out.replace("__", " ")
}

/// Length of the contiguous `_` run ending at byte `start` (inclusive).
fn underscore_run(s: &str, start: usize) -> usize {
    s.as_bytes()[..=start]
        .iter()
        .rev()
        .take_while(|&&b| b == b'_')
        .count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn round_trip(s: &str) {
        assert_eq!(decode(&encode(s)), s, "round-trip failed for {s:?}");
    }

    // ── encode ───────────────────────────────────────────────────────────

    #[test]
    fn safe_names_pass_through() {
        assert_eq!(encode("Flat_Bet_v2"), "Flat_Bet_v2");
    }

    #[test]
    fn spaces_become_double_underscores() {
        assert_eq!(encode("Flat Bet"), "Flat__Bet");
    }

    #[test]
    fn punctuation_is_scalar_escaped() {
        assert_eq!(encode("D'Alembert"), "D_39_Alembert");
        assert_eq!(encode("50/50"), "50_47_50");
    }

    #[test]
    fn non_ascii_is_scalar_escaped() {
        // é is U+00E9
        assert_eq!(encode("Martingale é"), "Martingale___233_");
    }

    #[test]
    fn space_and_underscore_do_not_collide() {
        assert_ne!(encode("A B"), encode("A_B"));
    }

    #[test]
    fn empty_string() {
        assert_eq!(encode(""), "");
        assert_eq!(decode(""), "");
    }

    // ── decode ───────────────────────────────────────────────────────────

    #[test]
    fn decode_resolves_escape() {
        assert_eq!(decode("D_39_Alembert"), "D'Alembert");
    }

    #[test]
    fn digits_inside_space_run_are_not_escapes() {
        // "a 7 b" → "a__7__b": the "_7_" match has an even underscore run
        // on its left and must be kept as space-run content.
        assert_eq!(encode("a 7 b"), "a__7__b");
        assert_eq!(decode("a__7__b"), "a 7 b");
    }

    #[test]
    fn invalid_scalar_is_kept_verbatim() {
        // U+D800 is a surrogate, not a valid scalar value.
        assert_eq!(decode("x_55296_y"), "x_55296_y");
    }

    #[test]
    fn oversized_scalar_is_kept_verbatim() {
        assert_eq!(decode("x_99999999999999999999_y"), "x_99999999999999999999_y");
    }

    // ── round-trips ──────────────────────────────────────────────────────

    #[test]
    fn round_trips() {
        round_trip("");
        round_trip("   ");
        round_trip("Flat Bet");
        round_trip("Oscar's Grind");
        round_trip("1-3-2-6");
        round_trip("a 7 b");
        round_trip(" 42 ");
        round_trip("snake_case_name");
        round_trip("Fibonacci über alles");
        round_trip("é7");
        round_trip("7 é");
        round_trip("🦀 bets");
    }

    // ── known parity ambiguity (kept for compatibility) ──────────────────

    #[test]
    fn literal_escape_shaped_substring_is_misdecoded() {
        // "_7_" in a display name survives encoding untouched, but decode
        // sees an odd underscore run and resolves it as U+0007. This is the
        // documented ambiguity of the scheme, not a regression.
        assert_eq!(encode("x_7_y"), "x_7_y");
        assert_eq!(decode("x_7_y"), "x\u{7}y");
    }

    #[test]
    fn adjacent_escapes_are_ambiguous() {
        // Two escaped characters back to back give the second escape an
        // even underscore run, so it is skipped. The same merge happens
        // when only spaces separate two escaped characters.
        assert_eq!(encode("éé"), "_233__233_");
        assert_eq!(decode("_233__233_"), "é_233_");
    }

    // ── property: round-trip over the unambiguous domain ─────────────────

    /// True when `s` avoids the known ambiguous shapes: no literal
    /// underscore, no digits mixed with scalar-escaped characters, and no
    /// two scalar-escaped characters separated only by spaces (their
    /// underscore runs merge and flip the parity check).
    fn unambiguous(s: &str) -> bool {
        let escaped = |c: char| !is_safe(c) && c != ' ';
        if s.contains('_') {
            return false;
        }
        if s.chars().any(escaped) && s.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }
        let mut pending = false;
        for c in s.chars() {
            if escaped(c) {
                if pending {
                    return false;
                }
                pending = true;
            } else if c != ' ' {
                pending = false;
            }
        }
        true
    }

    proptest! {
        // `prop_assume!` below rejects most arbitrary strings; allow enough
        // global rejects for 256 cases to pass the filter.
        #![proptest_config(ProptestConfig {
            max_global_rejects: 65536,
            ..ProptestConfig::default()
        })]

        #[test]
        fn round_trip_property(s in "\\PC{0,24}") {
            prop_assume!(unambiguous(&s));
            prop_assert_eq!(decode(&encode(&s)), s);
        }
    }
}
