use itertools::Itertools;

/// Turn a SCREAMING_SNAKE wire label into display text:
/// `DRAFT_SUBMITTED` becomes `Draft Submitted`.
pub fn enum_label(value: &str) -> String {
    value
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .join(" ")
}

/// Shorten display text to at most `max` characters, appending an
/// ellipsis when something was cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max).collect();
    shortened.push('…');
    shortened
}

/// Split the comma-delimited specialties field, dropping empty and
/// whitespace-only entries.
pub fn split_specialties(specialties: &str) -> Vec<String> {
    specialties
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
