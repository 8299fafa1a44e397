//! Error types for filter compilation.

use thiserror::Error;

use crate::scanner::Span;

/// A specialized Result type for filter compilation operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while compiling a filter expression.
///
/// All variants are configuration-time errors: the caller should reject
/// the expression rather than run with an invalid filter. Evaluation of a
/// compiled filter has no error channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A token appeared where the grammar does not allow it.
    #[error("unexpected token '{token}' at {span}")]
    UnexpectedToken {
        /// The verbatim token text.
        token: String,
        /// Where the token appears in the expression.
        span: Span,
    },

    /// A closing parenthesis without an opener, or an opener never closed.
    #[error("mismatched parentheses at {span}")]
    MismatchedParenthesis {
        /// The span of the offending parenthesis.
        span: Span,
    },

    /// The expression ends with an operator.
    #[error("expression ends with operator '{token}' at {span}")]
    TrailingOperator {
        /// The trailing operator text.
        token: String,
        /// Where the operator appears in the expression.
        span: Span,
    },

    /// A rule token without the `field:value` separator.
    #[error("invalid rule '{token}' at {span}: missing ':' separator")]
    MissingSeparator {
        /// The verbatim rule text.
        token: String,
        /// Where the rule appears in the expression.
        span: Span,
    },

    /// A rule names a field the rule table does not know.
    #[error("unsupported field '{field}' at {span}, supported fields: {}", supported.join(", "))]
    UnsupportedField {
        /// The unknown field name.
        field: String,
        /// Where the rule appears in the expression.
        span: Span,
        /// The full list of supported field names.
        supported: Vec<&'static str>,
    },

    /// A rule value does not satisfy its field's pattern.
    #[error("invalid value '{value}' for field '{field}' at {span}")]
    InvalidValue {
        /// The field the rule names.
        field: String,
        /// The rejected value text.
        value: String,
        /// Where the rule appears in the expression.
        span: Span,
    },
}

impl FilterError {
    /// Creates an unexpected token error.
    pub(crate) fn unexpected_token(token: impl Into<String>, span: Span) -> Self {
        FilterError::UnexpectedToken {
            token: token.into(),
            span,
        }
    }

    /// Creates a trailing operator error.
    pub(crate) fn trailing_operator(token: impl Into<String>, span: Span) -> Self {
        FilterError::TrailingOperator {
            token: token.into(),
            span,
        }
    }

    /// Creates an unsupported field error listing the supported keys.
    pub(crate) fn unsupported_field(field: impl Into<String>, span: Span) -> Self {
        FilterError::UnsupportedField {
            field: field.into(),
            span,
            supported: crate::rules::supported_keys(),
        }
    }

    /// Creates an invalid value error.
    pub(crate) fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        span: Span,
    ) -> Self {
        FilterError::InvalidValue {
            field: field.into(),
            value: value.into(),
            span,
        }
    }
}
