//! Static field rule table for filter expressions.
//!
//! Each supported field maps to a value pattern (checked at validation
//! time) and a checker kind (dispatched at evaluation time). The table is
//! immutable for the process lifetime and safe to share across threads.

use std::sync::LazyLock;

use regex::Regex;

/// The comparison semantics applied to a field's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerKind {
    /// Integer comparison: `A..B` inclusive range or `<op>N` with
    /// `op` one of `>`, `>=`, `<`, `<=`.
    Numeric,
    /// Case-insensitive substring match; `+` in the rule value means space.
    String,
    /// ISO calendar date comparison: `YYYY-MM-DD..YYYY-MM-DD` inclusive
    /// range or `<op>YYYY-MM-DD`, bounds normalized to UTC midnight.
    Date,
}

/// One entry of the field rule table.
#[derive(Debug)]
pub struct FieldRule {
    /// Field names this entry accepts.
    pub keys: &'static [&'static str],
    /// Anchored pattern a rule value must satisfy to validate.
    pub pattern: &'static LazyLock<Regex>,
    /// How values of these fields are compared.
    pub checker: CheckerKind,
}

impl FieldRule {
    /// Returns true if the value satisfies this entry's pattern.
    pub fn accepts_value(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

// A bare number or date (no range, no comparison operator) is rejected
// here: the checkers have no equality form to evaluate it with.
static NUMERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\.\.\d+|(?:>=|<=|>|<)\d+)$").unwrap());

static STRING_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.*$").unwrap());

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{4}-\d{2}-\d{2}\.\.\d{4}-\d{2}-\d{2}|(?:>=|<=|>|<)\d{4}-\d{2}-\d{2})$")
        .unwrap()
});

/// The field rule table, ordered; the first entry whose key set contains
/// the field name wins.
pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        keys: &["repos", "gists", "followers", "following"],
        pattern: &NUMERIC_PATTERN,
        checker: CheckerKind::Numeric,
    },
    FieldRule {
        keys: &["login", "name", "company", "location", "email"],
        pattern: &STRING_PATTERN,
        checker: CheckerKind::String,
    },
    FieldRule {
        keys: &["updated"],
        pattern: &DATE_PATTERN,
        checker: CheckerKind::Date,
    },
];

/// Looks up the table entry for a field name.
pub fn lookup(field: &str) -> Option<&'static FieldRule> {
    FIELD_RULES
        .iter()
        .find(|rule| rule.keys.contains(&field))
}

/// Returns every supported field name, in table order.
pub fn supported_keys() -> Vec<&'static str> {
    FIELD_RULES
        .iter()
        .flat_map(|rule| rule.keys.iter().copied())
        .collect()
}
