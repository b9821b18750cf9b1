//! Sort priorities and item ordering.
//!
//! Items within a directory level are ordered by a fixed keyword table first,
//! then by explicit author-assigned `order` metadata, then alphabetically.
//! Keyword priority always wins over explicit order so that anchor pages like
//! "Overview" stay at the top of a level regardless of what the metadata says.

use std::cmp::Ordering;

use crate::model::NavItem;

/// Priority for titles that match no keyword rule.
pub const DEFAULT_PRIORITY: u32 = 100;

/// Priority for titles that must sink to the bottom of a level.
pub const LAST_PRIORITY: u32 = 999;

/// Keyword rules, checked in order; the first matching rule wins.
///
/// A rule matches when the lowercased title contains any of its keywords.
const PRIORITY_RULES: &[(&[&str], u32)] = &[
    (&["overview"], 1),
    (&["setting up", "getting started", "setup"], 2),
    (&["introduction", "project structure", "intro"], 3),
    (&["home"], 4),
    (&["fundamentals", "layouts"], 5),
    (&["vocabulary"], 6),
    (&["bonus", "libraries", "frameworks"], LAST_PRIORITY),
];

/// Compute the keyword priority for a display title.
///
/// Matching is case-insensitive substring containment. Titles matching no
/// rule get [`DEFAULT_PRIORITY`], which sorts after every named rule and
/// before [`LAST_PRIORITY`].
#[must_use]
pub fn priority(title: &str) -> u32 {
    let lower = title.to_lowercase();

    for (keywords, value) in PRIORITY_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *value;
        }
    }

    DEFAULT_PRIORITY
}

/// Total ordering for sibling items.
///
/// Keyword priority is compared first whenever either side carries a
/// non-default one. Among default-priority items, explicit `order` metadata
/// applies, with ordered items before unordered ones. Ties at every stage
/// break alphabetically on the title, which makes the ordering total and the
/// sort deterministic.
#[must_use]
pub fn compare_items(a: &NavItem, b: &NavItem) -> Ordering {
    let pa = priority(&a.title);
    let pb = priority(&b.title);

    if pa != DEFAULT_PRIORITY || pb != DEFAULT_PRIORITY {
        return pa.cmp(&pb).then_with(|| a.title.cmp(&b.title));
    }

    match (a.order, b.order) {
        (Some(oa), Some(ob)) => oa.cmp(&ob).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(title: &str, order: Option<i64>) -> NavItem {
        NavItem {
            order,
            ..NavItem::leaf(title, "/x")
        }
    }

    #[test]
    fn test_priority_named_keywords() {
        assert_eq!(priority("Overview"), 1);
        assert_eq!(priority("Getting Started"), 2);
        assert_eq!(priority("Setting Up Your Environment"), 2);
        assert_eq!(priority("Introduction"), 3);
        assert_eq!(priority("Project Structure"), 3);
        assert_eq!(priority("Home"), 4);
        assert_eq!(priority("CSS Fundamentals"), 5);
        assert_eq!(priority("Page Layouts"), 5);
        assert_eq!(priority("Vocabulary"), 6);
    }

    #[test]
    fn test_priority_last_keywords() {
        assert_eq!(priority("Bonus Material"), LAST_PRIORITY);
        assert_eq!(priority("Libraries"), LAST_PRIORITY);
        assert_eq!(priority("CSS Frameworks"), LAST_PRIORITY);
    }

    #[test]
    fn test_priority_unmatched_is_default() {
        assert_eq!(priority("Forms"), DEFAULT_PRIORITY);
        assert_eq!(priority(""), DEFAULT_PRIORITY);
    }

    #[test]
    fn test_priority_first_rule_wins() {
        // "intro" also appears in "Introduction to Setup"; the setup rule
        // comes first in the table
        assert_eq!(priority("Introduction to Setup"), 2);
    }

    #[test]
    fn test_priority_is_case_insensitive() {
        assert_eq!(priority("OVERVIEW"), 1);
        assert_eq!(priority("overview of the course"), 1);
    }

    #[test]
    fn test_keyword_priority_beats_explicit_order() {
        let overview = item("Overview", Some(50));
        let forms = item("Forms", Some(1));

        assert_eq!(compare_items(&overview, &forms), Ordering::Less);
        assert_eq!(compare_items(&forms, &overview), Ordering::Greater);
    }

    #[test]
    fn test_last_priority_sinks_below_ordered_items() {
        let bonus = item("Bonus", Some(1));
        let forms = item("Forms", None);

        assert_eq!(compare_items(&bonus, &forms), Ordering::Greater);
    }

    #[test]
    fn test_explicit_order_among_default_priority() {
        let second = item("Tables", Some(2));
        let first = item("Forms", Some(1));

        assert_eq!(compare_items(&first, &second), Ordering::Less);
    }

    #[test]
    fn test_ordered_before_unordered() {
        let ordered = item("Tables", Some(9));
        let unordered = item("Accessibility", None);

        assert_eq!(compare_items(&ordered, &unordered), Ordering::Less);
    }

    #[test]
    fn test_alphabetical_fallback() {
        let a = item("Accessibility", None);
        let b = item("Forms", None);

        assert_eq!(compare_items(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_equal_priority_ties_break_on_title() {
        let a = item("Getting Started", None);
        let b = item("Setup Guide", None);

        assert_eq!(compare_items(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_equal_order_ties_break_on_title() {
        let a = item("Forms", Some(3));
        let b = item("Tables", Some(3));

        assert_eq!(compare_items(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_sort_is_deterministic_end_to_end() {
        let mut items = vec![
            item("Bonus", None),
            item("Tables", Some(2)),
            item("Overview", None),
            item("Accessibility", None),
            item("Forms", Some(1)),
            item("Getting Started", None),
        ];

        items.sort_by(compare_items);

        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Overview",
                "Getting Started",
                "Forms",
                "Tables",
                "Accessibility",
                "Bonus",
            ]
        );
    }
}
