pub mod apply;
pub mod rules;

pub use apply::{apply_rules, count_occurrences, rewrite_file, RewriteResult};
pub use rules::{ReplacementRule, ICON_RULES};
