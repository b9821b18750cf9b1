//! Static fallback navigation.
//!
//! A hand-authored copy of the course navigation, returned when the content
//! tree cannot be scanned at all. It must track the real content closely
//! enough to stay usable as a degraded sidebar; update it when top-level
//! course sections change.

use crate::model::{NavItem, NavSection};

fn leaf(title: &str, href: &str) -> NavItem {
    NavItem::leaf(title, href)
}

fn node(title: &str, href: &str, children: Vec<NavItem>) -> NavItem {
    NavItem {
        title: title.to_owned(),
        href: href.to_owned(),
        children,
        order: None,
    }
}

fn section(title: &str, items: Vec<NavItem>) -> NavSection {
    NavSection {
        title: title.to_owned(),
        items,
    }
}

/// The static navigation tree.
#[must_use]
pub fn fallback_navigation() -> Vec<NavSection> {
    vec![
        section(
            "Fundamentals",
            vec![
                leaf("Overview", "/"),
                node(
                    "Getting Started",
                    "/getting-started",
                    vec![
                        leaf("Need To Knows", "/getting-started/need-to-knows"),
                        leaf(
                            "Best Coding Practices",
                            "/getting-started/best-coding-practices",
                        ),
                        leaf(
                            "Accessibility Fundamentals",
                            "/getting-started/accessibility-fundamentals",
                        ),
                    ],
                ),
                leaf("Vocabulary", "/vocabulary"),
                leaf("Abbreviations", "/abbreviations"),
            ],
        ),
        section(
            "Developer Tools & Resources",
            vec![node(
                "Developer Tools & Resources",
                "/developer-tools-and-resources",
                vec![
                    leaf(
                        "Browser Developer Tools",
                        "/developer-tools-and-resources/browser-developer-tools",
                    ),
                    leaf(
                        "Command Line Interface",
                        "/developer-tools-and-resources/command-line-interface",
                    ),
                    leaf(
                        "Git and Github",
                        "/developer-tools-and-resources/git-and-github",
                    ),
                    leaf(
                        "Hosting and Deployment",
                        "/developer-tools-and-resources/hosting-and-deployment",
                    ),
                    leaf(
                        "Package Managers",
                        "/developer-tools-and-resources/package-managers",
                    ),
                ],
            )],
        ),
        section(
            "Core Technologies",
            vec![
                leaf("SEO & Accessibility", "/seo-accessibility"),
                node(
                    "HTML",
                    "/intro-to-html",
                    vec![
                        leaf("Overview", "/intro-to-html/overview"),
                        leaf("Semantic HTML", "/intro-to-html/semantic-html"),
                        leaf("HTML Templates", "/intro-to-html/html-templates"),
                        leaf("Element Hierarchy", "/intro-to-html/element-hierarchy"),
                        leaf(
                            "Elements and Attributes",
                            "/intro-to-html/elements-and-attributes",
                        ),
                        leaf("Style Elements", "/intro-to-html/style-elements"),
                    ],
                ),
                node(
                    "CSS",
                    "/intro-to-css",
                    vec![
                        leaf("Selectors", "/intro-to-css/selectors"),
                        leaf("Responsive Design", "/intro-to-css/responsive-design"),
                        leaf("Frameworks", "/intro-to-css/frameworks"),
                        leaf("Debugging", "/intro-to-css/debugging"),
                    ],
                ),
                node(
                    "JavaScript",
                    "/intro-to-javascript",
                    vec![
                        leaf("Data Types", "/intro-to-javascript/data-types"),
                        leaf("Functions Objects", "/intro-to-javascript/functions-objects"),
                        leaf("ES6 Features", "/intro-to-javascript/es6-features"),
                        leaf("Browser APIs", "/intro-to-javascript/browser-apis"),
                    ],
                ),
                node(
                    "Document Object Model",
                    "/document-object-model",
                    vec![
                        leaf("Manipulation", "/document-object-model/manipulation"),
                        leaf("Events", "/document-object-model/events"),
                    ],
                ),
                leaf("Forms", "/forms"),
                leaf("jQuery", "/jQuery"),
            ],
        ),
        section(
            "Design",
            vec![node(
                "UX/UI Design",
                "/UX-UI-Design",
                vec![
                    leaf("Wireframing", "/UX-UI-Design/wireframing"),
                    leaf("Design Trends", "/UX-UI-Design/design-trends"),
                    leaf("Typography", "/UX-UI-Design/typography"),
                ],
            )],
        ),
        section(
            "Projects",
            vec![
                node(
                    "Quiz App",
                    "/quiz-app",
                    vec![
                        leaf("Part 1", "/quiz-app/part-1"),
                        leaf("Part 2", "/quiz-app/part-2"),
                        leaf("Part 3", "/quiz-app/part-3"),
                    ],
                ),
                node(
                    "Website Portfolio",
                    "/website-portfolio",
                    vec![
                        leaf("Part 1", "/website-portfolio/part-1"),
                        leaf("Part 2", "/website-portfolio/part-2"),
                    ],
                ),
            ],
        ),
        section(
            "Utilities & Tools",
            vec![
                leaf("Resources & Utilities", "/resources-utilities"),
                leaf("Helper Functions", "/helper-functions"),
                leaf("Development Tools", "/development-tools"),
                leaf("Utility Libraries", "/utility-libraries"),
            ],
        ),
        section(
            "Advanced Topics",
            vec![
                leaf("Performance", "/performance"),
                leaf("Security", "/security"),
                leaf("Storage Solutions", "/storage-solutions"),
                node(
                    "Application Programming Interface",
                    "/application-programming-interface",
                    vec![
                        leaf("APIs", "/application-programming-interface/APIs"),
                        leaf(
                            "Content Delivery Networks",
                            "/application-programming-interface/content-delivery-networks",
                        ),
                    ],
                ),
                leaf("Frameworks", "/frameworks"),
                leaf("Libraries", "/libraries"),
                leaf("TypeScript", "/typescript"),
                node(
                    "React",
                    "/react",
                    vec![
                        leaf("Overview", "/react/overview"),
                        leaf("Next.js Overview", "/react/nextjs/overview"),
                        leaf("Next.js Components", "/react/nextjs/components"),
                        leaf("Next.js Routing", "/react/nextjs/routing"),
                        leaf("Remix", "/react/remix"),
                    ],
                ),
            ],
        ),
    ]
}
