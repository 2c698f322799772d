//! The fixed table of icon replacement rules.

/// A literal pattern and its static replacement text
///
/// Matching is exact substring comparison: no wildcards, no regex
/// semantics. A rule whose pattern never occurs is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementRule {
    /// Short identifier used in log output
    pub name: &'static str,
    /// Exact text to search for
    pub pattern: &'static str,
    /// Text substituted for every occurrence of the pattern
    pub replacement: &'static str,
}

/// The five icon rewrites, applied in order.
///
/// Each pattern is a guarded render of an icon component; each
/// replacement is self-contained inline markup with no component
/// dependency. No replacement contains any rule's pattern, so a second
/// pass over rewritten text leaves it unchanged.
pub const ICON_RULES: [ReplacementRule; 5] = [
    // Checkmark: plain glyph in a styled span instead of SVG
    ReplacementRule {
        name: "checkmark",
        pattern: r##"{CheckIcon && <CheckIcon size={18} style={{ color: '#10b981', flexShrink: 0, marginTop: '2px' }} />}"##,
        replacement: r##"<span style={{color: '#10b981', fontSize: '1.25rem'}}>✓</span>"##,
    },
    // Shopping cart: two wheels plus body path, stroked with the text color
    ReplacementRule {
        name: "cart",
        pattern: r##"{CartIcon && <CartIcon size={24} />}"##,
        replacement: r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" strokeWidth="2"><circle cx="9" cy="21" r="1"></circle><circle cx="20" cy="21" r="1"></circle><path d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6"></path></svg>"##,
    },
    // User: single filled head-and-shoulders silhouette
    ReplacementRule {
        name: "user",
        pattern: r##"{UserIcon && <UserIcon size={16} />}"##,
        replacement: r##"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor"><path d="M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z"></path></svg>"##,
    },
    // Search: lens circle and handle stroke
    ReplacementRule {
        name: "search",
        pattern: r##"{SearchIcon && <SearchIcon size={20} />}"##,
        replacement: r##"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" strokeWidth="2"><circle cx="11" cy="11" r="8"></circle><path d="m21 21-4.35-4.35"></path></svg>"##,
    },
    // Star: five-point polygon, gold fill and stroke
    ReplacementRule {
        name: "star",
        pattern: r##"{StarIcon && <StarIcon size={16} fill="#fbbf24" color="#fbbf24" />}"##,
        replacement: r##"<svg width="16" height="16" viewBox="0 0 24 24" fill="#fbbf24" stroke="#fbbf24" strokeWidth="2"><polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"></polygon></svg>"##,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_shape() {
        assert_eq!(ICON_RULES.len(), 5);
        for rule in &ICON_RULES {
            assert!(!rule.pattern.is_empty());
            assert!(!rule.replacement.is_empty());
            assert_ne!(rule.pattern, rule.replacement);
        }
    }

    #[test]
    fn test_patterns_are_guarded_renders() {
        for rule in &ICON_RULES {
            assert!(rule.pattern.starts_with('{'));
            assert!(rule.pattern.contains("&& <"));
            assert!(rule.pattern.ends_with("/>}"));
        }
    }

    #[test]
    fn test_replacements_never_contain_patterns() {
        // Guarantees idempotence of the whole pass: rewritten output can
        // never match a rule again.
        for a in &ICON_RULES {
            for b in &ICON_RULES {
                assert!(
                    !a.replacement.contains(b.pattern),
                    "replacement of '{}' contains pattern of '{}'",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn test_patterns_do_not_overlap() {
        for a in &ICON_RULES {
            for b in &ICON_RULES {
                if a.name != b.name {
                    assert!(!a.pattern.contains(b.pattern));
                }
            }
        }
    }
}
