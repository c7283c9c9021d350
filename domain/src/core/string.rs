//! String utilities for the domain layer.

/// Turn a snake_case identifier into a title-cased display label
///
/// Used when a supplement has no catalog entry: `"vitamin_b_complex"`
/// becomes `"Vitamin B Complex"`. Empty segments are dropped.
pub fn humanize_identifier(id: &str) -> String {
    id.split(['_', '-'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Push `label` onto `labels` unless an equal label is already present
///
/// Keeps first-seen order, which the ranking tiebreak relies on.
pub fn push_unique(labels: &mut Vec<String>, label: impl Into<String>) {
    let label = label.into();
    if !labels.contains(&label) {
        labels.push(label);
    }
}
