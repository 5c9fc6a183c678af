//! Ordered rule collection with parse-time dead-rule elimination

use crate::rule::Rule;

/// An ordered sequence of [`Rule`]s, insertion order = file order.
///
/// Evaluation scans the set in *reverse* insertion order per directory level
/// so that, within one level, the rule declared later in the file wins.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse pattern-file text into a rule set.
    ///
    /// Lines are split on LF, CRLF, or lone CR. Lines that fail per-line
    /// parsing are skipped, never fatal; `ignore_case` is copied into every
    /// rule.
    pub fn parse(text: &str, ignore_case: bool) -> RuleSet {
        let mut set = RuleSet::new();
        for line in text.split(['\n', '\r']) {
            if let Some(rule) = Rule::parse(line, ignore_case) {
                set.push(rule);
            }
        }
        set
    }

    /// Append a rule, unless dead-rule elimination proves it unreachable.
    ///
    /// A negated rule without wildcards can only ever flip the result of some
    /// earlier rule; if no earlier rule could be negated by it, it is dropped.
    /// Negations that carry wildcards are always kept, because their effect
    /// on other wildcard rules cannot be determined statically.
    pub fn push(&mut self, rule: Rule) {
        if rule.is_negated() && !rule.has_wildcard() && !self.negates_existing_rule(&rule) {
            tracing::debug!(pattern = rule.pattern(), "dropping no-op negation");
            return;
        }
        self.rules.push(rule);
    }

    /// Whether `neg` could flip the result of any rule already in the set.
    ///
    /// Earlier literal rules are compared textually (with the basename-tail
    /// equivalence, so `!name` cancels `dir/name`); earlier wildcard rules
    /// are asked whether they match the negation's pattern text.
    fn negates_existing_rule(&self, neg: &Rule) -> bool {
        self.rules.iter().any(|rule| {
            if rule.has_wildcard() {
                rule.matches_pattern_text(neg.pattern())
            } else {
                !rule.is_negated() && literal_negates(rule, neg)
            }
        })
    }

    /// Rules in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules retained after elimination.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Whether literal negation `neg` cancels the literal rule `rule`.
///
/// Equal patterns cancel; otherwise a basename-only negation cancels a path
/// rule whose final segment equals it (and vice versa).
fn literal_negates(rule: &Rule, neg: &Rule) -> bool {
    let fold = neg.is_case_insensitive();
    let eq = |a: &str, b: &str| {
        if fold {
            a.eq_ignore_ascii_case(b)
        } else {
            a == b
        }
    };

    let (a, b) = (rule.pattern(), neg.pattern());
    if a.len() == b.len() {
        return eq(a, b);
    }

    let (shorter, longer) = if a.len() < b.len() { (a, b) } else { (b, a) };
    if shorter.contains('/') {
        return false;
    }

    let tail_start = longer.len() - shorter.len();
    if !longer.is_char_boundary(tail_start) || longer.as_bytes()[tail_start - 1] != b'/' {
        return false;
    }
    eq(&longer[tail_start..], shorter)
}
