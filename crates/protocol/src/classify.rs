//! Keyword-based task classification.
//!
//! New tasks get a priority and a set of tags derived from their title and
//! description. Matching is a case-insensitive substring search over
//! `title + " " + description`, so `"ui"` also matches inside `"build"`.
//!
//! # Priority
//!
//! | Keywords | Priority |
//! |----------|----------|
//! | `urgent`, `critical`, `bug` | `High` |
//! | `minor`, `cleanup`, `refactor` | `Low` |
//! | none of the above | `Medium` |
//!
//! The high-priority set is checked first and wins when both sets match.
//!
//! # Tags
//!
//! Tag rules are evaluated in a fixed order and each rule contributes its tag
//! at most once, so the resulting list is ordered and duplicate-free.

use serde::{Deserialize, Serialize};

use crate::task::Priority;

/// Keywords that mark a task as high priority.
const HIGH_PRIORITY_KEYWORDS: &[&str] = &["urgent", "critical", "bug"];

/// Keywords that mark a task as low priority.
const LOW_PRIORITY_KEYWORDS: &[&str] = &["minor", "cleanup", "refactor"];

/// A named tag with the keywords that trigger it.
struct TagRule {
    tag: &'static str,
    keywords: &'static [&'static str],
}

/// Tag rules in evaluation order.
const TAG_RULES: &[TagRule] = &[
    TagRule {
        tag: "frontend",
        keywords: &["frontend", "ui", "css", "html", "react", "vue", "angular"],
    },
    TagRule {
        tag: "backend",
        keywords: &["backend", "api", "server", "database", "node"],
    },
    TagRule {
        tag: "testing",
        keywords: &["test", "spec", "coverage", "qa"],
    },
    TagRule {
        tag: "security",
        keywords: &["auth", "security", "login", "jwt", "token"],
    },
    TagRule {
        tag: "performance",
        keywords: &["optimize", "performance", "speed", "cache"],
    },
    TagRule {
        tag: "bug",
        keywords: &["bug", "fix", "error", "issue"],
    },
];

/// The result of classifying a task's text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Classification {
    /// Detected priority.
    pub priority: Priority,
    /// Detected tags in rule order.
    pub tags: Vec<String>,
}

/// Classifies a task from its title and description.
///
/// Deterministic and side-effect free.
///
/// # Examples
///
/// ```
/// use devboard_protocol::{Priority, classify};
///
/// let result = classify("Fix urgent bug in login", "");
/// assert_eq!(result.priority, Priority::High);
/// assert_eq!(result.tags, vec!["security", "bug"]);
///
/// assert_eq!(classify("Minor cleanup", "").priority, Priority::Low);
/// assert_eq!(classify("Write changelog", "").priority, Priority::Medium);
/// ```
#[must_use]
pub fn classify(title: &str, description: &str) -> Classification {
    let text = format!("{title} {description}").to_lowercase();
    Classification {
        priority: detect_priority(&text),
        tags: detect_tags(&text),
    }
}

/// Detects the priority of already-lowercased text.
fn detect_priority(text: &str) -> Priority {
    if contains_any(text, HIGH_PRIORITY_KEYWORDS) {
        Priority::High
    } else if contains_any(text, LOW_PRIORITY_KEYWORDS) {
        Priority::Low
    } else {
        Priority::Medium
    }
}

/// Detects the tags of already-lowercased text.
fn detect_tags(text: &str) -> Vec<String> {
    TAG_RULES
        .iter()
        .filter(|rule| contains_any(text, rule.keywords))
        .map(|rule| rule.tag.to_string())
        .collect()
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgent_login_bug_is_high_with_security_and_bug() {
        let result = classify("Fix urgent bug in login", "");
        assert_eq!(result.priority, Priority::High);
        assert!(result.tags.contains(&"security".to_string()));
        assert!(result.tags.contains(&"bug".to_string()));
    }

    #[test]
    fn minor_cleanup_is_low() {
        assert_eq!(classify("Minor cleanup", "").priority, Priority::Low);
    }

    #[test]
    fn refactor_alone_is_low() {
        assert_eq!(classify("Refactor module", "").priority, Priority::Low);
    }

    #[test]
    fn high_keyword_overrides_low_keyword() {
        let result = classify("Refactor module", "critical path is slow");
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn no_keywords_is_medium_without_tags() {
        let result = classify("Write changelog", "");
        assert_eq!(result.priority, Priority::Medium);
        assert!(result.tags.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = classify("URGENT", "Deploy REACT build");
        assert_eq!(result.priority, Priority::High);
        assert_eq!(result.tags, vec!["frontend"]);
    }

    #[test]
    fn description_participates_in_matching() {
        let result = classify("Sprint item", "database migration for the auth server");
        assert_eq!(result.tags, vec!["backend", "security"]);
    }

    #[test]
    fn tags_follow_rule_order() {
        let result = classify("bug in css test", "slow api login cache");
        assert_eq!(
            result.tags,
            vec![
                "frontend",
                "backend",
                "testing",
                "security",
                "performance",
                "bug"
            ]
        );
    }

    #[test]
    fn each_tag_appears_once() {
        let result = classify("bug bug fix error issue", "another bug");
        assert_eq!(result.tags, vec!["bug"]);
    }

    #[test]
    fn title_and_description_are_joined_with_space() {
        // "no" + "de" must not form "node" across the boundary.
        let result = classify("no", "de");
        assert!(result.tags.is_empty());
    }
}
