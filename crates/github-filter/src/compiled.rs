//! Compiled, reusable filter programs.

use github_user_rs::GithubUser;

use crate::error::FilterResult;
use crate::evaluator;
use crate::postfix;
use crate::scanner::{Scanner, Token};
use crate::validator;

/// Compiles a filter expression into a reusable [`CompiledFilter`].
///
/// The expression is scanned, validated against the grammar and the field
/// rule table, and converted to postfix form once. The returned filter is
/// then cheap to evaluate per record.
///
/// An empty or all-whitespace expression compiles to the match-everything
/// filter: no filter means every record passes.
///
/// # Errors
///
/// Returns a [`FilterError`](crate::FilterError) describing the offending
/// token and its position when the expression is malformed, names an
/// unsupported field, or carries a value its field's pattern rejects.
/// Callers should reject the configuration rather than run without the
/// filter they asked for.
///
/// # Example
///
/// ```
/// use github_filter_rs::compile;
/// use github_user_rs::GithubUser;
///
/// let filter = compile("followers:>100 & !company:Acme").unwrap();
///
/// let user = GithubUser {
///     followers: Some(500),
///     company: Some("Initech".to_string()),
///     ..GithubUser::default()
/// };
/// assert!(filter.matches(&user));
/// ```
pub fn compile(expr: &str) -> FilterResult<CompiledFilter> {
    let tokens = Scanner::new(expr).scan();
    validator::validate(&tokens)?;
    Ok(CompiledFilter {
        postfix: postfix::infix_to_postfix(tokens),
    })
}

/// A validated filter expression in postfix form.
///
/// Constructed through [`compile`], which always validates before
/// conversion, so evaluation can never underflow its operand stack.
/// Immutable after construction: one `CompiledFilter` can be shared and
/// evaluated concurrently against many records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFilter {
    postfix: Vec<Token>,
}

impl CompiledFilter {
    /// Returns the filter that matches every record.
    ///
    /// This is what an absent configuration value compiles to; callers
    /// with an optional expression setting can use it directly.
    pub fn match_all() -> Self {
        Self {
            postfix: Vec::new(),
        }
    }

    /// Returns true if the record satisfies the filter expression.
    pub fn matches(&self, user: &GithubUser) -> bool {
        evaluator::evaluate(&self.postfix, user)
    }

    /// Filters a slice of records, returning only those that match.
    pub fn filter_users<'a>(&self, users: &'a [GithubUser]) -> Vec<&'a GithubUser> {
        users.iter().filter(|user| self.matches(user)).collect()
    }

    /// Returns true if this filter matches every record.
    pub fn is_match_all(&self) -> bool {
        self.postfix.is_empty()
    }
}

impl Default for CompiledFilter {
    fn default() -> Self {
        Self::match_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_valid_expression() {
        let filter = compile("followers:>100").unwrap();
        assert!(!filter.is_match_all());
    }

    #[test]
    fn test_compile_empty_is_match_all() {
        assert!(compile("").unwrap().is_match_all());
        assert!(compile("  \t ").unwrap().is_match_all());
        assert!(CompiledFilter::match_all().is_match_all());
        assert!(CompiledFilter::default().is_match_all());
    }

    #[test]
    fn test_compile_rejects_invalid_expression() {
        assert!(compile("followers:>100 &").is_err());
        assert!(compile("unknownfield:5").is_err());
    }

    #[test]
    fn test_match_all_matches_everything() {
        let filter = CompiledFilter::match_all();
        assert!(filter.matches(&GithubUser::default()));
    }

    #[test]
    fn test_filter_users() {
        let filter = compile("followers:>100").unwrap();
        let users = vec![
            GithubUser {
                id: 1,
                followers: Some(150),
                ..GithubUser::default()
            },
            GithubUser {
                id: 2,
                followers: Some(50),
                ..GithubUser::default()
            },
            GithubUser {
                id: 3,
                ..GithubUser::default()
            },
        ];

        let matched = filter.filter_users(&users);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_compiled_filter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledFilter>();
    }
}
