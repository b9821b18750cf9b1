//! Display title formatting for slug-like directory names.

/// Irregular titles that the hyphen-splitting rule would mangle.
///
/// Looked up by exact directory name before the default rule applies.
const SPECIAL_TITLES: &[(&str, &str)] = &[
    ("jQuery", "jQuery"),
    ("UX-UI-Design", "UX/UI Design"),
];

/// Convert a slug-like directory or file name into a display title.
///
/// Splits on hyphens, uppercases the first letter of each segment and joins
/// with spaces: `"getting-started"` becomes `"Getting Started"`.
#[must_use]
pub fn format_title(name: &str) -> String {
    if let Some((_, title)) = SPECIAL_TITLES.iter().find(|(slug, _)| *slug == name) {
        return (*title).to_owned();
    }

    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a segment.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
