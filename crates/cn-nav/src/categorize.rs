//! Bucketing of top-level items into named sidebar sections.
//!
//! Assignment is driven by an ordered rule table matched against the
//! lowercased href and title; the first matching rule wins. The rules
//! deliberately overlap ("react" appears in the advanced rule, "css" in the
//! core-technologies rule), so evaluation order is part of the contract and
//! differs from the order sections are emitted in.

use crate::model::{NavItem, NavSection};

/// The closed section taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Category {
    Fundamentals,
    DeveloperTools,
    CoreTechnologies,
    Design,
    Projects,
    Utilities,
    Advanced,
}

const CATEGORY_COUNT: usize = 7;

/// One assignment rule: an item matches when its lowercased href contains
/// any path keyword or its lowercased title contains any title keyword.
struct Rule {
    category: Category,
    path_keywords: &'static [&'static str],
    title_keywords: &'static [&'static str],
}

/// Assignment rules in evaluation order. Advanced is checked before
/// core technologies so stack-specific topics win over the base keywords
/// they also contain.
const RULES: &[Rule] = &[
    Rule {
        category: Category::Fundamentals,
        path_keywords: &["overview", "getting-started", "vocabulary", "abbreviations"],
        title_keywords: &[],
    },
    Rule {
        category: Category::DeveloperTools,
        path_keywords: &[
            "browser-developer-tools",
            "command-line-interface",
            "tools-and-resources-overview",
            "development-environment",
            "git-and-github",
            "hosting-and-deployment",
            "package-managers",
        ],
        title_keywords: &["development environment", "developer tools"],
    },
    Rule {
        category: Category::Advanced,
        path_keywords: &[
            "performance",
            "security",
            "storage-solutions",
            "frameworks",
            "libraries",
            "typescript",
            "react",
            "nextjs",
        ],
        title_keywords: &[
            "performance",
            "security",
            "storage",
            "apis",
            "framework",
            "library",
            "typescript",
            "react",
            "nextjs",
            "advanced",
        ],
    },
    Rule {
        category: Category::CoreTechnologies,
        path_keywords: &[
            "seo-accessibility",
            "intro-to-html",
            "intro-to-css",
            "intro-to-javascript",
            "document-object-model",
            "forms",
            "jquery",
        ],
        title_keywords: &[
            "html",
            "css",
            "javascript",
            "seo",
            "accessibility",
            "dom",
            "forms",
            "jquery",
        ],
    },
    Rule {
        category: Category::Projects,
        path_keywords: &["quiz-app", "project", "website-portfolio"],
        title_keywords: &["project", "portfolio"],
    },
    Rule {
        category: Category::Design,
        path_keywords: &["ux-ui-design", "design"],
        title_keywords: &["design", "ux", "ui"],
    },
    Rule {
        category: Category::Utilities,
        path_keywords: &[
            "utilities-tools",
            "resources-utilities",
            "helper-functions",
            "development-tools",
            "utility-libraries",
        ],
        title_keywords: &["utilities", "utility", "helper", "tools"],
    },
];

/// Section emission order with display labels. Empty buckets are omitted.
const EMISSION: &[(Category, &str)] = &[
    (Category::Fundamentals, "Fundamentals"),
    (Category::DeveloperTools, "Developer Tools & Resources"),
    (Category::CoreTechnologies, "Core Technologies"),
    (Category::Design, "Design"),
    (Category::Projects, "Projects"),
    (Category::Utilities, "Utilities & Tools"),
    (Category::Advanced, "Advanced Topics"),
];

/// Pick the category for one item.
///
/// The site root and unmatched items both land in fundamentals.
fn assign(item: &NavItem) -> Category {
    let path = item.href.to_lowercase();
    let title = item.title.to_lowercase();

    if path == "/" {
        return Category::Fundamentals;
    }

    for rule in RULES {
        let path_hit = rule.path_keywords.iter().any(|k| path.contains(k));
        let title_hit = rule.title_keywords.iter().any(|k| title.contains(k));
        if path_hit || title_hit {
            return rule.category;
        }
    }

    Category::Fundamentals
}

/// Bucket a flat item list into sections, consuming the items.
///
/// Items keep their relative order within a section. Sections are emitted in
/// the fixed taxonomy order and only when non-empty.
#[must_use]
pub fn categorize(items: Vec<NavItem>) -> Vec<NavSection> {
    let mut buckets: [Vec<NavItem>; CATEGORY_COUNT] = Default::default();

    for item in items {
        buckets[assign(&item) as usize].push(item);
    }

    let mut sections = Vec::new();
    for (category, label) in EMISSION {
        let bucket = std::mem::take(&mut buckets[*category as usize]);
        if !bucket.is_empty() {
            sections.push(NavSection {
                title: (*label).to_owned(),
                items: bucket,
            });
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn section_of(items: Vec<NavItem>) -> String {
        let sections = categorize(items);
        assert_eq!(sections.len(), 1);
        sections[0].title.clone()
    }

    #[test]
    fn test_root_lands_in_fundamentals() {
        assert_eq!(
            section_of(vec![NavItem::leaf("Overview", "/")]),
            "Fundamentals"
        );
    }

    #[test]
    fn test_unmatched_defaults_to_fundamentals() {
        assert_eq!(
            section_of(vec![NavItem::leaf("Miscellany", "/miscellany")]),
            "Fundamentals"
        );
    }

    #[test]
    fn test_react_lands_in_advanced() {
        assert_eq!(
            section_of(vec![NavItem::leaf("React", "/react")]),
            "Advanced Topics"
        );
    }

    #[test]
    fn test_react_category_ignores_children() {
        let with_children = NavItem {
            children: vec![NavItem::leaf("Overview", "/react/overview")],
            ..NavItem::leaf("React", "/react")
        };

        assert_eq!(section_of(vec![with_children]), "Advanced Topics");
    }

    #[test]
    fn test_css_frameworks_hits_advanced_before_core() {
        // "frameworks" in the path wins over the "css" title keyword
        assert_eq!(
            section_of(vec![NavItem::leaf("CSS Frameworks", "/intro-to-css/frameworks")]),
            "Advanced Topics"
        );
    }

    #[test]
    fn test_core_technologies_by_path_and_title() {
        assert_eq!(
            section_of(vec![NavItem::leaf("Forms", "/forms")]),
            "Core Technologies"
        );
        assert_eq!(
            section_of(vec![NavItem::leaf("jQuery", "/jQuery")]),
            "Core Technologies"
        );
    }

    #[test]
    fn test_grouping_item_categorized_by_title() {
        let grouping = NavItem {
            children: vec![NavItem::leaf("Wireframing", "/UX-UI-Design/wireframing")],
            ..NavItem::leaf("UX/UI Design", "#")
        };

        assert_eq!(section_of(vec![grouping]), "Design");
    }

    #[test]
    fn test_projects_bucket() {
        assert_eq!(
            section_of(vec![NavItem::leaf("Quiz App", "/quiz-app")]),
            "Projects"
        );
    }

    #[test]
    fn test_developer_tools_by_title_keyword() {
        assert_eq!(
            section_of(vec![NavItem::leaf(
                "Developer Tools & Resources",
                "/developer-tools-and-resources"
            )]),
            "Developer Tools & Resources"
        );
    }

    #[test]
    fn test_utilities_bucket() {
        assert_eq!(
            section_of(vec![NavItem::leaf("Helper Functions", "/helper-functions")]),
            "Utilities & Tools"
        );
    }

    #[test]
    fn test_emission_order_is_fixed() {
        let sections = categorize(vec![
            NavItem::leaf("React", "/react"),
            NavItem::leaf("Quiz App", "/quiz-app"),
            NavItem::leaf("Forms", "/forms"),
            NavItem::leaf("Overview", "/"),
        ]);

        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Fundamentals",
                "Core Technologies",
                "Projects",
                "Advanced Topics",
            ]
        );
    }

    #[test]
    fn test_empty_buckets_omitted() {
        let sections = categorize(vec![NavItem::leaf("Forms", "/forms")]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Core Technologies");
    }

    #[test]
    fn test_items_keep_relative_order_within_section() {
        let sections = categorize(vec![
            NavItem::leaf("HTML", "/intro-to-html"),
            NavItem::leaf("CSS", "/intro-to-css"),
            NavItem::leaf("JavaScript", "/intro-to-javascript"),
        ]);

        let titles: Vec<_> = sections[0].items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["HTML", "CSS", "JavaScript"]);
    }

    #[test]
    fn test_empty_input_yields_no_sections() {
        assert!(categorize(Vec::new()).is_empty());
    }
}
