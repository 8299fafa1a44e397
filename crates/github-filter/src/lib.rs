//! Boolean filter expression engine for GitHub user records.
//!
//! This crate compiles operator-authored filter expressions like
//! `followers:>100 & !company:Acme` into reusable programs and evaluates
//! them against [`GithubUser`](github_user_rs::GithubUser) records, so an
//! automation run can decide locally which candidate users to act on.
//!
//! # Supported Syntax
//!
//! ## Rules
//! A rule is `field:value`. Value syntax depends on the field:
//! - Numeric fields `repos`, `gists`, `followers`, `following`:
//!   an inclusive range `5..10` or a comparison `>100`, `>=100`, `<10`,
//!   `<=10`.
//! - String fields `login`, `name`, `company`, `location`, `email`:
//!   a case-insensitive substring; `+` stands for a space
//!   (`company:acme+inc` matches "Acme Inc").
//! - Date field `updated`: an inclusive range
//!   `2024-01-01..2024-06-30` or a comparison `>2024-01-01`, with bounds
//!   at UTC midnight.
//!
//! A record with no value for a filtered field never satisfies that rule.
//!
//! ## Boolean Operators
//! - `&` - AND
//! - `|` - OR (same precedence as `&`, left-associative)
//! - `!` - NOT (binds tightest)
//! - `()` - Grouping
//!
//! Whitespace is insignificant. An empty expression matches every record.
//!
//! # Pipeline
//!
//! [`compile`] scans the expression, validates the grammar and each rule
//! against the field rule table, and rewrites the tokens into postfix
//! form. The resulting [`CompiledFilter`] evaluates with a boolean stack
//! machine, once per record. Compile once per distinct expression and
//! reuse the filter; evaluation is the per-record hot path.
//!
//! # Example
//!
//! ```
//! use github_filter_rs::compile;
//! use github_user_rs::GithubUser;
//!
//! let filter = compile("(followers:>100 | following:<10) & !company:Acme").unwrap();
//!
//! let user = GithubUser {
//!     followers: Some(200),
//!     company: Some("Other".to_string()),
//!     ..GithubUser::default()
//! };
//! assert!(filter.matches(&user));
//! ```

mod compiled;
mod error;
mod evaluator;
mod postfix;
mod rules;
mod scanner;
mod validator;

pub use compiled::{compile, CompiledFilter};
pub use error::{FilterError, FilterResult};
pub use rules::supported_keys;
pub use scanner::Span;
