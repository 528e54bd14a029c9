//! Extraction of human-readable guidelines from the markdown ruleset.
//!
//! The extracted strings are included in reports for context; nothing here is
//! machine-enforced.

use regex::Regex;
use std::sync::OnceLock;

/// Matches below this length are headings fragments or markup noise.
const MIN_RULE_LEN: usize = 10;

fn patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"^- (.+)$").expect("bullet pattern"),
            Regex::new(r"^\d+\. (.+)$").expect("numbered pattern"),
            Regex::new(r"^\*\* (.+) \*\*").expect("bold pattern"),
        ]
    })
}

/// Pull bullet points, numbered list items, and bold statements out of a
/// markdown document, keeping anything longer than [`MIN_RULE_LEN`].
pub fn extract_rules(text: &str) -> Vec<String> {
    let mut rules = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        for pattern in patterns() {
            if let Some(caps) = pattern.captures(line) {
                let rule = caps[1].trim();
                if rule.chars().count() > MIN_RULE_LEN {
                    rules.push(rule.to_string());
                }
            }
        }
    }
    rules
}
