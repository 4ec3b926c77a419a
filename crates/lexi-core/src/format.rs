//! Pure string transforms used when shaping field values.
//!
//! Every function here is total: empty input yields empty output rather than
//! a panic. `punctuate`, `depunctuate`, `capitalize`, and `embolden` are
//! idempotent.

/// Opening and closing tags wrapped around emboldened keywords.
pub const BOLD_OPEN: &str = "<b>";
pub const BOLD_CLOSE: &str = "</b>";

/// Ensure `text` ends with punctuation, appending a period if it does not.
#[must_use]
pub fn punctuate(text: &str) -> String {
    let trimmed = text.trim_end();
    match trimmed.chars().last() {
        None => String::new(),
        Some(last) if last.is_ascii_punctuation() => trimmed.to_string(),
        Some(_) => format!("{trimmed}."),
    }
}

/// Strip all trailing punctuation (and any whitespace interleaved with it).
#[must_use]
pub fn depunctuate(text: &str) -> String {
    text.trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_string()
}

/// Upper-case the first character of `text`.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Wrap every case-insensitive occurrence of `keyword` in `<b>` tags.
///
/// The casing of each occurrence is preserved. Occurrences that are already
/// wrapped, or that sit inside a markup tag, are left alone.
#[must_use]
pub fn embolden(text: &str, keyword: &str) -> String {
    if keyword.is_empty() {
        return text.to_string();
    }
    // ASCII lower-casing keeps byte offsets aligned with `text`.
    let haystack = text.to_ascii_lowercase();
    let needle = keyword.to_ascii_lowercase();

    let mut out = String::with_capacity(text.len() + BOLD_OPEN.len() + BOLD_CLOSE.len());
    let mut cursor = 0;
    for (start, _) in haystack.match_indices(&needle) {
        let end = start + needle.len();
        let wrapped = text[..start].ends_with(BOLD_OPEN) && text[end..].starts_with(BOLD_CLOSE);
        if wrapped || inside_tag(&text[..start]) {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push_str(BOLD_OPEN);
        out.push_str(&text[start..end]);
        out.push_str(BOLD_CLOSE);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// True when `prefix` ends within an unclosed `<...>` tag.
fn inside_tag(prefix: &str) -> bool {
    prefix.rfind('<') > prefix.rfind('>')
}

/// Map a full part-of-speech name to its dictionary abbreviation.
///
/// Unknown names are returned unchanged.
#[must_use]
pub fn abbreviate_part_of_speech(part_of_speech: &str) -> String {
    let abbreviated = match part_of_speech {
        "noun" => "noun",
        "verb" => "verb",
        "adjective" => "adj",
        "adverb" => "adv",
        "pronoun" => "pron",
        "preposition" => "prep",
        "conjunction" => "conj",
        "interjection" => "interj",
        "determiner" => "det",
        "article" => "art",
        "abbreviation" => "abbr",
        other => other,
    };
    abbreviated.to_string()
}

/// Transliterate Unicode text to plain ASCII (`prō` becomes `pro`).
#[must_use]
pub fn to_ascii(text: &str) -> String {
    deunicode::deunicode(text)
}

/// Number of whitespace-separated words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Strip enumeration and markup artifacts a language model puts around list
/// items: `1.`, `2)`, `(3)`, `-`, `*`, `•`, `**bold**`, and wrapping quotes.
#[must_use]
pub fn strip_list_marker(line: &str) -> String {
    let mut rest = line.trim();
    loop {
        let before = rest;
        rest = strip_enumeration(strip_bullet(rest)).trim_start();
        if rest == before {
            break;
        }
    }
    let unmarked = rest.replace("**", "");
    unquote(unmarked.trim()).trim().to_string()
}

fn strip_bullet(text: &str) -> &str {
    for bullet in ['-', '*', '•', '–', '—'] {
        if let Some(rest) = text.strip_prefix(bullet) {
            if rest.starts_with(char::is_whitespace) {
                return rest;
            }
        }
    }
    text
}

fn strip_enumeration(text: &str) -> &str {
    let (inner, parenthesized) = text
        .strip_prefix('(')
        .map_or((text, false), |rest| (rest, true));
    let digits = inner.len() - inner.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return text;
    }
    let after = &inner[digits..];
    let closed = if parenthesized {
        after.strip_prefix(')')
    } else {
        after.strip_prefix(['.', ')', ':'])
    };
    closed.unwrap_or(text)
}

fn unquote(text: &str) -> &str {
    for (open, close) in [('"', '"'), ('“', '”'), ('\'', '\'')] {
        if text.chars().count() >= 2 {
            if let Some(inner) = text.strip_prefix(open).and_then(|t| t.strip_suffix(close)) {
                return inner;
            }
        }
    }
    text
}
