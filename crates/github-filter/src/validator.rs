//! Grammar and semantic validation of scanned filter expressions.
//!
//! Validation is a pure pass over the token list: it checks the boolean
//! grammar with a small expected-token automaton, balances parentheses
//! with a side stack, and checks each `field:value` rule against the
//! field rule table. It performs no evaluation.

use crate::error::{FilterError, FilterResult};
use crate::rules;
use crate::scanner::{Token, TokenKind};

/// Token kinds allowed where an operand may start: at the beginning of the
/// expression and after `(`, `!`, `&`, or `|`.
const EXPECT_OPERAND: &[TokenKind] = &[TokenKind::Rule, TokenKind::Not, TokenKind::LeftParen];

/// Token kinds allowed after a complete operand (a rule or `)`).
const EXPECT_OPERATOR: &[TokenKind] = &[TokenKind::And, TokenKind::Or, TokenKind::RightParen];

/// Validates a scanned token list.
///
/// Returns `Ok(())` when the tokens form a well-formed expression whose
/// rules all name supported fields with acceptable values. An empty token
/// list is valid (it denotes the match-everything filter).
pub(crate) fn validate(tokens: &[Token]) -> FilterResult<()> {
    let mut paren_stack: Vec<&Token> = Vec::new();
    let mut expected = EXPECT_OPERAND;

    for token in tokens {
        match token.kind {
            TokenKind::RightParen => {
                // An unbalanced ')' is reported as a parenthesis problem
                // even where the grammar would not allow ')' anyway.
                if paren_stack.pop().is_none() {
                    return Err(FilterError::MismatchedParenthesis { span: token.span });
                }
                // Covers the empty group "()".
                if !expected.contains(&token.kind) {
                    return Err(FilterError::unexpected_token(&token.text, token.span));
                }
                expected = EXPECT_OPERATOR;
            }
            TokenKind::LeftParen => {
                if !expected.contains(&token.kind) {
                    return Err(FilterError::unexpected_token(&token.text, token.span));
                }
                paren_stack.push(token);
                expected = EXPECT_OPERAND;
            }
            TokenKind::Rule => {
                if !expected.contains(&token.kind) {
                    return Err(FilterError::unexpected_token(&token.text, token.span));
                }
                validate_rule(token)?;
                expected = EXPECT_OPERATOR;
            }
            TokenKind::Not | TokenKind::And | TokenKind::Or => {
                if !expected.contains(&token.kind) {
                    return Err(FilterError::unexpected_token(&token.text, token.span));
                }
                expected = EXPECT_OPERAND;
            }
        }
    }

    if let Some(token) = tokens.last() {
        if matches!(token.kind, TokenKind::And | TokenKind::Or | TokenKind::Not) {
            return Err(FilterError::trailing_operator(&token.text, token.span));
        }
    }

    if let Some(open) = paren_stack.last() {
        return Err(FilterError::MismatchedParenthesis { span: open.span });
    }

    Ok(())
}

/// Checks one `field:value` rule against the field rule table.
fn validate_rule(token: &Token) -> FilterResult<()> {
    let Some((field, value)) = token.text.split_once(':') else {
        return Err(FilterError::MissingSeparator {
            token: token.text.clone(),
            span: token.span,
        });
    };

    let Some(rule) = rules::lookup(field) else {
        return Err(FilterError::unsupported_field(field, token.span));
    };

    if !rule.accepts_value(value) {
        return Err(FilterError::invalid_value(field, value, token.span));
    }

    Ok(())
}
