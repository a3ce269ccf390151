//! casing.rs - Case-preserving substitution.
//!
//! When a target phrase is swapped for its replacement, the replacement
//! should carry the letter case the original had in the page: `REFUGEE`
//! becomes `ASYLUM SEEKER`, `Refugee` becomes `Asylum seeker`. The checks
//! compare the string against its case-transformed copies, evaluated in
//! order with the first match winning.
//!
//! Known limitation: case folding is the simple per-character upper/lower
//! mapping. Scripts without a case distinction pass through unchanged, and
//! locale-specific rules (e.g. Turkish dotless i) are not applied.
//!
//! License: MIT OR Apache-2.0

/// Applies the case pattern of `original` to `replacement`.
///
/// Rules, first match wins:
/// 1. `original` entirely uppercase -> replacement upper-cased.
/// 2. `original` entirely lowercase -> replacement lower-cased.
/// 3. `original` title case (first char upper, rest lower) -> replacement
///    with its first character capitalized and the rest lower-cased.
/// 4. Mixed case -> positional mirroring: each replacement character takes
///    the case of the original character at the same index; positions past
///    the end of `original` are lower-cased. Best-effort, not
///    linguistically exact.
pub fn apply_case(original: &str, replacement: &str) -> String {
    if is_all_uppercase(original) {
        return replacement.to_uppercase();
    }

    if is_all_lowercase(original) {
        return replacement.to_lowercase();
    }

    if is_title_case(original) {
        return capitalize_first(replacement);
    }

    mirror_positional_case(original, replacement)
}

/// True when upper-casing the string changes nothing (no lowercase letters
/// present; digits and punctuation count as "uppercase" here, matching the
/// transformed-copy comparison).
fn is_all_uppercase(s: &str) -> bool {
    s == s.to_uppercase()
}

/// True when lower-casing the string changes nothing.
fn is_all_lowercase(s: &str) -> bool {
    s == s.to_lowercase()
}

/// True when the first character is unchanged by upper-casing and the rest
/// is unchanged by lower-casing.
fn is_title_case(s: &str) -> bool {
    let mut chars = s.char_indices();
    let Some((_, first)) = chars.next() else {
        return false;
    };
    let rest_start = chars.next().map_or(s.len(), |(i, _)| i);
    let rest = &s[rest_start..];

    first.to_uppercase().to_string() == first.to_string() && rest == rest.to_lowercase()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Positional case mirroring for mixed-case originals.
fn mirror_positional_case(original: &str, replacement: &str) -> String {
    let original_chars: Vec<char> = original.chars().collect();
    let mut result = String::with_capacity(replacement.len());

    for (i, ch) in replacement.chars().enumerate() {
        let upper = original_chars
            .get(i)
            .map(|oc| oc.to_uppercase().to_string() == oc.to_string())
            .unwrap_or(false);
        if upper {
            result.extend(ch.to_uppercase());
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}
