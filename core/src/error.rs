//! Error types for the site API client.
//!
//! # Design
//! Failures are grouped by where they happen: before any request exists
//! (`MissingSlug`), at the HTTP status check (`Status`), inside a rejected
//! submission (`Rejected`, which carries the message meant for the visitor),
//! in JSON handling, or in the host's transport. Transport errors are
//! forwarded untouched so callers can downcast them.

use std::fmt;

use thiserror::Error;

/// The REST resource an operation talks to. Used to name failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Articles,
    ArticleDetail,
    NewsList,
    NewsDetail,
    Page,
    Reviews,
    Schedule,
    Services,
    Hero,
    DayScenario,
    ServiceRequest,
    Lead,
}

impl Resource {
    pub fn label(self) -> &'static str {
        match self {
            Resource::Articles => "articles",
            Resource::ArticleDetail => "article detail",
            Resource::NewsList => "news list",
            Resource::NewsDetail => "news detail",
            Resource::Page => "page",
            Resource::Reviews => "reviews",
            Resource::Schedule => "schedule",
            Resource::Services => "services",
            Resource::Hero => "hero",
            Resource::DayScenario => "day scenario",
            Resource::ServiceRequest => "service request",
            Resource::Lead => "lead",
        }
    }

    /// Noun used when a detail identifier is missing ("article slug is required").
    fn subject(self) -> &'static str {
        match self {
            Resource::ArticleDetail => "article",
            Resource::NewsDetail => "news",
            other => other.label(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors returned by `SiteClient` and `SiteApi`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A detail operation was called with an empty or blank slug.
    #[error("{} slug is required", .0.subject())]
    MissingSlug(Resource),

    /// The server answered a read with a non-2xx status.
    #[error("{resource} request failed: {status}")]
    Status {
        resource: Resource,
        status: u16,
        body: String,
    },

    /// The server refused a submission. `message` is safe to show to the visitor.
    #[error("{message}")]
    Rejected {
        resource: Resource,
        status: u16,
        message: String,
    },

    /// A success response body was not valid JSON.
    #[error("{resource} response is not valid JSON: {source}")]
    Deserialization {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    /// A submission payload could not be serialized.
    #[error("{resource} payload could not be serialized: {source}")]
    Serialization {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ApiError {
    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } | ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_resource_and_code() {
        let err = ApiError::Status {
            resource: Resource::NewsDetail,
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "news detail request failed: 404");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn missing_slug_uses_short_subject() {
        assert_eq!(
            ApiError::MissingSlug(Resource::ArticleDetail).to_string(),
            "article slug is required"
        );
        assert_eq!(ApiError::MissingSlug(Resource::Page).to_string(), "page slug is required");
    }

    #[test]
    fn rejected_displays_only_the_message() {
        let err = ApiError::Rejected {
            resource: Resource::Lead,
            status: 400,
            message: "Обязательное поле.".to_string(),
        };
        assert_eq!(err.to_string(), "Обязательное поле.");
    }

    #[test]
    fn transport_error_is_forwarded() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ApiError::Transport(Box::new(io));
        assert_eq!(err.to_string(), "refused");
        assert!(err.status().is_none());
    }
}
