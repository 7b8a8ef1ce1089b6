//! String-case conversion and small text helpers.
//!
//! Case converters share one word splitter: `_`, `-`, whitespace and
//! any other non-alphanumeric character separate words, and so do
//! lower→upper transitions (`fooBar`), letter→digit transitions
//! (`level2`), digit→upper transitions (`2Boss`) and the end of an
//! acronym (`HTTPServer` → `HTTP`, `Server`).

/// Splits an identifier or phrase into words.
///
/// # Examples
/// ```
/// use u_toolkit::strings::split_words;
/// assert_eq!(split_words("playerHealth_max"), vec!["player", "Health", "max"]);
/// assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
/// ```
pub fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_alphabetic() && c.is_numeric())
                || (prev.is_numeric() && c.is_uppercase())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Uppercases the first character and lowercases the rest.
fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn join_lower(text: &str, separator: &str) -> String {
    split_words(text)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `"Player Health"` → `"player_health"`
pub fn to_snake_case(text: &str) -> String {
    join_lower(text, "_")
}

/// `"Player Health"` → `"player-health"`
pub fn to_kebab_case(text: &str) -> String {
    join_lower(text, "-")
}

/// `"player_health"` → `"playerHealth"`
pub fn to_camel_case(text: &str) -> String {
    let words = split_words(text);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&title_word(word));
        }
    }
    out
}

/// `"player_health"` → `"PlayerHealth"`
///
/// # Examples
/// ```
/// use u_toolkit::strings::to_pascal_case;
/// assert_eq!(to_pascal_case("enemy-spawn point"), "EnemySpawnPoint");
/// ```
pub fn to_pascal_case(text: &str) -> String {
    split_words(text).iter().map(|w| title_word(w)).collect()
}

/// `"player_health"` → `"Player Health"`
pub fn to_title_case(text: &str) -> String {
    split_words(text)
        .iter()
        .map(|w| title_word(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases only the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reverses by Unicode scalar value.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Case-insensitive palindrome check over alphanumeric characters only.
///
/// # Examples
/// ```
/// use u_toolkit::strings::is_palindrome;
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("engine"));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Shortens `text` to at most `max_chars` characters, ending with
/// `ellipsis` when something was cut. If the ellipsis alone does not fit,
/// the text is simply cut.
pub fn truncate(text: &str, max_chars: usize, ellipsis: &str) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let ellipsis_len = ellipsis.chars().count();
    if ellipsis_len >= max_chars {
        return text.chars().take(max_chars).collect();
    }
    let mut out: String = text.chars().take(max_chars - ellipsis_len).collect();
    out.push_str(ellipsis);
    out
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Non-overlapping occurrences of `pattern`; an empty pattern counts 0.
pub fn count_occurrences(text: &str, pattern: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    text.matches(pattern).count()
}

/// Left-pads with `fill` up to `width` characters.
pub fn pad_left(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    let mut out: String = std::iter::repeat(fill).take(width.saturating_sub(len)).collect();
    out.push_str(text);
    out
}

/// Right-pads with `fill` up to `width` characters.
pub fn pad_right(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    let mut out = text.to_string();
    out.extend(std::iter::repeat(fill).take(width.saturating_sub(len)));
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn snake_case_is_idempotent(text in "[a-zA-Z0-9 _-]{0,40}") {
            let once = to_snake_case(&text);
            prop_assert_eq!(to_snake_case(&once), once.clone());
        }

        #[test]
        fn reverse_twice_is_identity(text in "\\PC{0,40}") {
            prop_assert_eq!(reverse(&reverse(&text)), text);
        }

        #[test]
        fn truncate_respects_limit(text in "\\PC{0,60}", max in 0_usize..30) {
            prop_assert!(truncate(&text, max, "...").chars().count() <= max);
        }
    }
}
