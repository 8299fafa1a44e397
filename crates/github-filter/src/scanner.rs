//! Scanner (tokenizer) for filter expressions.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// A half-open byte range `[start, end)` in the source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where the token starts (0-indexed).
    pub start: usize,
    /// Byte offset one past the end of the token.
    pub end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// The kind of a token in a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Opening parenthesis `(`.
    LeftParen,
    /// Closing parenthesis `)`.
    RightParen,
    /// The AND operator (`&`).
    And,
    /// The OR operator (`|`).
    Or,
    /// The NOT operator (`!`).
    Not,
    /// A `field:value` rule.
    Rule,
}

/// A token with its verbatim source text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The verbatim source slice (the operator character, or the full
    /// `field:value` text for rule tokens).
    pub text: String,
    /// Where the token appears in the source expression.
    pub span: Span,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' at {}", self.text, self.span)
    }
}

/// Returns the token kind for a single-character operator, if any.
fn operator_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '&' => Some(TokenKind::And),
        '|' => Some(TokenKind::Or),
        '!' => Some(TokenKind::Not),
        _ => None,
    }
}

/// Scanner for tokenizing filter expressions.
///
/// Scanning never fails: the five operator characters `( ) & | !` each
/// produce a one-character token, whitespace separates tokens, and any
/// other maximal run of characters becomes a single [`TokenKind::Rule`]
/// token holding the verbatim text. Whether a rule token is meaningful is
/// decided later by the validator.
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    /// Current byte position in the input string.
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given expression.
    pub fn new(expr: &'a str) -> Self {
        Self {
            chars: expr.chars().peekable(),
            position: 0,
        }
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// Consumes and returns the next character, updating position.
    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(ch) = c {
            self.position += ch.len_utf8();
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.peek() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Reads a rule token: everything up to the next operator or whitespace.
    fn read_rule(&mut self) -> String {
        let mut text = String::new();
        while let Some(&c) = self.peek() {
            if c.is_whitespace() || operator_kind(c).is_some() {
                break;
            }
            text.push(c);
            self.next_char();
        }
        text
    }

    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let c = *self.peek()?;
        let start = self.position;

        if let Some(kind) = operator_kind(c) {
            self.next_char();
            return Some(Token::new(kind, c, Span::new(start, self.position)));
        }

        let text = self.read_rule();
        Some(Token::new(
            TokenKind::Rule,
            text,
            Span::new(start, self.position),
        ))
    }

    /// Collects all tokens into a vector.
    ///
    /// An empty or all-whitespace input yields an empty vector.
    pub fn scan(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(expr: &str) -> Vec<TokenKind> {
        Scanner::new(expr).scan().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_scan_empty() {
        assert!(Scanner::new("").scan().is_empty());
        assert!(Scanner::new("   \t\n").scan().is_empty());
    }

    #[test]
    fn test_scan_single_rule() {
        let tokens = Scanner::new("followers:>100").scan();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Rule);
        assert_eq!(tokens[0].text, "followers:>100");
        assert_eq!(tokens[0].span, Span::new(0, 14));
    }

    #[test]
    fn test_scan_operators() {
        assert_eq!(
            kinds("( ) & | !"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Not,
            ]
        );
    }

    #[test]
    fn test_scan_operators_without_whitespace() {
        let tokens = Scanner::new("!company:Acme&(login:foo|login:bar)").scan();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Not,
                TokenKind::Rule,
                TokenKind::And,
                TokenKind::LeftParen,
                TokenKind::Rule,
                TokenKind::Or,
                TokenKind::Rule,
                TokenKind::RightParen,
            ]
        );
        assert_eq!(tokens[1].text, "company:Acme");
        assert_eq!(tokens[4].text, "login:foo");
    }

    #[test]
    fn test_scan_whitespace_separates_rules() {
        let tokens = Scanner::new("login:foo  name:bar").scan();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "login:foo");
        assert_eq!(tokens[1].text, "name:bar");
    }

    #[test]
    fn test_scan_spans_cover_non_whitespace() {
        let expr = " followers:>10 & !login:x ";
        let tokens = Scanner::new(expr).scan();
        // Spans are ordered, non-overlapping, and rebuild the source exactly.
        let mut last_end = 0;
        for token in &tokens {
            assert!(token.span.start >= last_end);
            assert_eq!(&expr[token.span.start..token.span.end], token.text);
            last_end = token.span.end;
        }
    }

    #[test]
    fn test_scan_arbitrary_text_is_a_rule() {
        // The scanner does not judge rule contents.
        let tokens = Scanner::new("not-even-a-rule").scan();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Rule);
    }

    #[test]
    fn test_scan_multibyte_positions() {
        let tokens = Scanner::new("name:héllo & login:x").scan();
        assert_eq!(tokens[0].text, "name:héllo");
        assert_eq!(tokens[1].kind, TokenKind::And);
        // 'é' is two bytes; the '&' span must use byte offsets.
        assert_eq!(tokens[1].span.start, "name:héllo ".len());
    }
}
