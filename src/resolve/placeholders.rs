use regex::{NoExpand, Regex};

fn placeholder_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r":[A-Za-z0-9_]+").expect("invalid placeholder regex"))
}

/// Placeholder identifiers are single `[A-Za-z0-9_]+` tokens; anything else can
/// never name a placeholder and goes straight to the query string.
fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// List the placeholder names still present in `template`, in order of first
/// appearance and without duplicates.
pub fn placeholder_names(template: &str) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    let mut names = Vec::new();
    for token in placeholder_pattern().find_iter(template) {
        let name = &token.as_str()[1..];
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }
    names
}

/// Replace every whole-token occurrence of the `:name` placeholder in `text`.
///
/// Matching respects token boundaries: substituting `id` touches `:id` but
/// never the `:id` prefix of `:identity`. Returns `None` when the placeholder
/// does not occur, so the caller can divert the parameter to the query string.
pub fn substitute(text: &str, name: &str, replacement: &str) -> Option<String> {
    if !is_placeholder_name(name) {
        return None;
    }

    let token = Regex::new(&format!(":{name}\\b")).expect("invalid placeholder token regex");
    if !token.is_match(text) {
        return None;
    }
    Some(token.replace_all(text, NoExpand(replacement)).into_owned())
}
