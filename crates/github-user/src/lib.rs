//! GitHub user profile data model.
//!
//! This crate defines the [`GithubUser`] struct that represents a full user
//! profile from the GitHub REST API (`GET /users/{username}`). It is the
//! record type that filter expressions from `github-filter-rs` are evaluated
//! against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub user profile.
///
/// Mirrors the relevant subset of the `GET /users/{username}` payload.
/// Every profile attribute is optional: GitHub omits or nulls fields the
/// user never filled in, and list-endpoint payloads carry only a stub of
/// the full profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GithubUser {
    /// The unique numeric identifier for the user.
    #[serde(default)]
    pub id: u64,

    /// The user's login name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// The user's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The company shown on the user's profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The location shown on the user's profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// The user's public email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The number of public repositories.
    #[serde(
        default,
        rename = "public_repos",
        skip_serializing_if = "Option::is_none"
    )]
    pub repos: Option<i64>,

    /// The number of public gists.
    #[serde(
        default,
        rename = "public_gists",
        skip_serializing_if = "Option::is_none"
    )]
    pub gists: Option<i64>,

    /// The number of followers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<i64>,

    /// The number of users this user follows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<i64>,

    /// When the account was created.
    #[serde(default, rename = "created_at", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the profile was last updated.
    #[serde(default, rename = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_full_profile() {
        let user: GithubUser = serde_json::from_str(
            r#"{
                "id": 583231,
                "login": "octocat",
                "name": "The Octocat",
                "company": "GitHub",
                "location": "San Francisco",
                "email": null,
                "public_repos": 8,
                "public_gists": 8,
                "followers": 9999,
                "following": 9,
                "created_at": "2011-01-25T18:44:36Z",
                "updated_at": "2024-03-22T11:28:34Z"
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, 583231);
        assert_eq!(user.login.as_deref(), Some("octocat"));
        assert_eq!(user.company.as_deref(), Some("GitHub"));
        assert_eq!(user.email, None);
        assert_eq!(user.repos, Some(8));
        assert_eq!(user.followers, Some(9999));
        assert_eq!(
            user.updated,
            Some(Utc.with_ymd_and_hms(2024, 3, 22, 11, 28, 34).unwrap())
        );
    }

    #[test]
    fn test_deserialize_stub_profile() {
        // List endpoints return only a stub of the profile.
        let user: GithubUser =
            serde_json::from_str(r#"{"id": 1, "login": "mojombo"}"#).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.login.as_deref(), Some("mojombo"));
        assert_eq!(user.name, None);
        assert_eq!(user.repos, None);
        assert_eq!(user.updated, None);
    }

    #[test]
    fn test_unknown_payload_fields_are_ignored() {
        let user: GithubUser = serde_json::from_str(
            r#"{"id": 2, "login": "defunkt", "avatar_url": "https://example.com/a.png"}"#,
        )
        .unwrap();
        assert_eq!(user.login.as_deref(), Some("defunkt"));
    }

    #[test]
    fn test_default_is_all_absent() {
        let user = GithubUser::default();
        assert_eq!(user.login, None);
        assert_eq!(user.followers, None);
        assert_eq!(user.updated, None);
    }
}
