//! Evaluation of postfix filter programs against user records.
//!
//! A boolean stack machine: rule tokens dispatch into the field rule
//! table's checkers, operators pop and combine. Evaluation is pure, cheap
//! (one pass over the program with a private operand stack), and safe to
//! run concurrently from multiple threads.

use chrono::{DateTime, NaiveDate, Utc};
use github_user_rs::GithubUser;

use crate::rules::{self, CheckerKind};
use crate::scanner::{Token, TokenKind};

/// A comparison operator in a numeric or date rule value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CmpOp {
    Gt,
    Ge,
    Lt,
    Le,
}

impl CmpOp {
    fn compare<T: PartialOrd>(self, value: T, bound: T) -> bool {
        match self {
            CmpOp::Gt => value > bound,
            CmpOp::Ge => value >= bound,
            CmpOp::Lt => value < bound,
            CmpOp::Le => value <= bound,
        }
    }
}

/// Splits a rule value like `">=100"` into its operator and operand text.
fn split_op(rule: &str) -> Option<(CmpOp, &str)> {
    // Two-character operators first so ">=" is not read as ">" then "=".
    if let Some(rest) = rule.strip_prefix(">=") {
        Some((CmpOp::Ge, rest))
    } else if let Some(rest) = rule.strip_prefix("<=") {
        Some((CmpOp::Le, rest))
    } else if let Some(rest) = rule.strip_prefix('>') {
        Some((CmpOp::Gt, rest))
    } else if let Some(rest) = rule.strip_prefix('<') {
        Some((CmpOp::Lt, rest))
    } else {
        None
    }
}

/// Checks a numeric rule value (`"A..B"` or `"<op>N"`) against an attribute.
///
/// Bounds compare as integers, so `"9..10"` does not match 100. Values the
/// validator accepted can still fail to parse as `i64` at absurd
/// magnitudes; those rules simply never match.
fn check_number(rule: &str, value: i64) -> bool {
    if let Some((start, end)) = rule.split_once("..") {
        let (Ok(start), Ok(end)) = (start.parse::<i64>(), end.parse::<i64>()) else {
            return false;
        };
        return start <= value && value <= end;
    }

    match split_op(rule) {
        Some((op, num)) => num
            .parse::<i64>()
            .is_ok_and(|bound| op.compare(value, bound)),
        None => false,
    }
}

/// Checks a string rule value against an attribute.
///
/// Literal `+` characters stand for spaces (rule values cannot contain
/// whitespace), and matching is a case-insensitive substring test.
fn check_string(rule: &str, value: &str) -> bool {
    let needle = rule.replace('+', " ").to_lowercase();
    value.to_lowercase().contains(&needle)
}

/// Parses an ISO calendar date and normalizes it to UTC midnight.
fn parse_utc_date(text: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Checks a date rule value (`"A..B"` or `"<op>YYYY-MM-DD"`) against an
/// attribute. Calendar-invalid dates (e.g. `2024-02-31`) never match.
fn check_date(rule: &str, value: DateTime<Utc>) -> bool {
    if let Some((start, end)) = rule.split_once("..") {
        let (Some(start), Some(end)) = (parse_utc_date(start), parse_utc_date(end)) else {
            return false;
        };
        return start <= value && value <= end;
    }

    match split_op(rule) {
        Some((op, date)) => parse_utc_date(date).is_some_and(|bound| op.compare(value, bound)),
        None => false,
    }
}

/// Reads an integer attribute from the record by field name.
fn numeric_attribute(user: &GithubUser, field: &str) -> Option<i64> {
    match field {
        "repos" => user.repos,
        "gists" => user.gists,
        "followers" => user.followers,
        "following" => user.following,
        _ => None,
    }
}

/// Reads a string attribute from the record by field name.
fn string_attribute<'a>(user: &'a GithubUser, field: &str) -> Option<&'a str> {
    match field {
        "login" => user.login.as_deref(),
        "name" => user.name.as_deref(),
        "company" => user.company.as_deref(),
        "location" => user.location.as_deref(),
        "email" => user.email.as_deref(),
        _ => None,
    }
}

/// Evaluates one `field:value` rule against a record.
///
/// A record with no value for the filtered field does not satisfy the
/// predicate, so the result is `false`.
fn check_rule(field: &str, rule_value: &str, user: &GithubUser) -> bool {
    let Some(entry) = rules::lookup(field) else {
        return false;
    };

    match entry.checker {
        CheckerKind::Numeric => {
            numeric_attribute(user, field).is_some_and(|value| check_number(rule_value, value))
        }
        CheckerKind::String => {
            string_attribute(user, field).is_some_and(|value| check_string(rule_value, value))
        }
        CheckerKind::Date => user.updated.is_some_and(|value| check_date(rule_value, value)),
    }
}

/// Pops an operand, panicking on underflow.
///
/// Underflow means the postfix program was built from tokens that never
/// passed validation. That cannot happen through `compile()`; if it does,
/// it is a bug in this crate, not bad input, so it is fatal.
fn pop_operand(stack: &mut Vec<bool>) -> bool {
    stack
        .pop()
        .expect("operand stack underflow: postfix program bypassed validation")
}

/// Evaluates a postfix filter program against one record.
///
/// An empty program matches every record.
pub(crate) fn evaluate(postfix: &[Token], user: &GithubUser) -> bool {
    let mut stack: Vec<bool> = Vec::new();

    for token in postfix {
        match token.kind {
            TokenKind::Rule => {
                let result = match token.text.split_once(':') {
                    Some((field, rule_value)) => check_rule(field, rule_value, user),
                    None => false,
                };
                stack.push(result);
            }
            TokenKind::And => {
                let b = pop_operand(&mut stack);
                let a = pop_operand(&mut stack);
                stack.push(a && b);
            }
            TokenKind::Or => {
                let b = pop_operand(&mut stack);
                let a = pop_operand(&mut stack);
                stack.push(a || b);
            }
            TokenKind::Not => {
                let a = pop_operand(&mut stack);
                stack.push(!a);
            }
            TokenKind::LeftParen | TokenKind::RightParen => {
                unreachable!("parentheses are removed during postfix conversion")
            }
        }
    }

    let result = stack.pop().unwrap_or(true);
    debug_assert!(stack.is_empty(), "leftover operands after evaluation");
    result
}
