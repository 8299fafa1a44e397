//! Infix to postfix conversion of validated token lists.
//!
//! A restricted shunting-yard rewrite. Operator precedence, highest to
//! lowest:
//!
//! 1. `!` (NOT) - unary, applies to the single operand that follows it
//! 2. `&` / `|` (AND / OR) - binary, equal precedence, left-associative
//!
//! Parentheses override precedence in the usual way.
//!
//! The converter does not re-check the grammar: fed a malformed token list
//! it can produce a postfix sequence that underflows the evaluator's
//! operand stack. It is therefore crate-private and reached only through
//! [`compile`](crate::compile), which validates first.

use crate::scanner::{Token, TokenKind};

/// Rewrites an infix token list into postfix (reverse Polish) order.
pub(crate) fn infix_to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut stack: Vec<Token> = Vec::new();
    let mut postfix: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::Rule => postfix.push(token),

            // Both apply to whatever operand comes next.
            TokenKind::Not | TokenKind::LeftParen => stack.push(token),

            TokenKind::RightParen => {
                while let Some(top) = stack.pop() {
                    if top.kind == TokenKind::LeftParen {
                        break;
                    }
                    postfix.push(top);
                }
            }

            TokenKind::And | TokenKind::Or => {
                // Emit anything that binds at least as tight before
                // stacking this operator: `!` binds tighter, and `&`/`|`
                // chain left-associatively at equal precedence. Only a
                // '(' stops the pops.
                while matches!(
                    stack.last(),
                    Some(top) if matches!(
                        top.kind,
                        TokenKind::And | TokenKind::Or | TokenKind::Not
                    )
                ) {
                    if let Some(top) = stack.pop() {
                        postfix.push(top);
                    }
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        postfix.push(top);
    }
    postfix
}
