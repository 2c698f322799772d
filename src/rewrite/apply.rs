use anyhow::Result;
use similar::{ChangeTag, TextDiff};
use std::path::Path;
use tracing::debug;

use crate::rewrite::rules::{ReplacementRule, ICON_RULES};
use crate::utils::fs::{read_file_to_string, write_file_sync};

/// Result of applying replacement rules to a document
#[derive(Debug, Clone)]
pub struct RewriteResult {
    /// Rewritten content
    pub content: String,
    /// Total occurrences substituted across all rules
    pub replacements: usize,
    /// Whether any rule matched
    pub changes_made: bool,
}

/// Counts non-overlapping occurrences of a literal pattern
pub fn count_occurrences(content: &str, pattern: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    content.matches(pattern).count()
}

/// Applies a list of replacement rules to a document
///
/// Rules run in order; each replaces every occurrence of its pattern,
/// not just the first. A rule that matches nothing is skipped silently
/// apart from a debug line.
pub fn apply_rules(content: &str, rules: &[ReplacementRule]) -> RewriteResult {
    let mut result = content.to_string();
    let mut replacements = 0;

    for rule in rules {
        let hits = count_occurrences(&result, rule.pattern);
        if hits == 0 {
            debug!("Rule '{}' matched nothing", rule.name);
            continue;
        }

        result = result.replace(rule.pattern, rule.replacement);
        replacements += hits;
        debug!("Rule '{}' replaced {} occurrence(s)", rule.name, hits);
    }

    RewriteResult {
        content: result,
        replacements,
        changes_made: replacements > 0,
    }
}

/// Reads the file, applies the icon rules, writes the result back
///
/// The read handle is released before the write begins; the file is
/// overwritten in place. Zero matching rules still rewrites the file
/// with identical content.
pub fn rewrite_file(path: impl AsRef<Path>) -> Result<RewriteResult> {
    let path = path.as_ref();

    let original = read_file_to_string(path)?;
    let result = apply_rules(&original, &ICON_RULES);

    if result.changes_made {
        let diff = TextDiff::from_lines(original.as_str(), result.content.as_str());
        let changed_lines = diff
            .iter_all_changes()
            .filter(|c| c.tag() != ChangeTag::Equal)
            .count();
        debug!(
            "{} replacement(s) touched {} line(s) in {}",
            result.replacements,
            changed_lines,
            path.display()
        );
    }

    write_file_sync(path, &result.content)?;

    Ok(result)
}
