//! Error types for content validation.

use thiserror::Error;

/// Errors reported by [`crate::content::validate`].
///
/// The page itself has no fallible operations; these only guard the
/// literal content tables against editing mistakes before a build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// A display field that must carry text is empty or whitespace.
    #[error("{entity} `{name}` has an empty `{field}` field")]
    EmptyField {
        /// Kind of record ("brand", "service", "partner", "office").
        entity: &'static str,
        /// Identifying name of the record, or its index when the name itself is empty.
        name: String,
        /// Name of the offending field.
        field: &'static str,
    },

    /// Two partner links share a display name.
    #[error("partner `{0}` is listed more than once")]
    DuplicatePartner(String),

    /// Two sections resolve to the same DOM id.
    #[error("section id `{0}` is used more than once")]
    DuplicateSection(&'static str),

    /// Service ordinals must read "01", "02", ... in order.
    #[error("service `{title}` has ordinal `{found}`, expected `{expected}`")]
    OrdinalOutOfSequence {
        /// Title of the service step.
        title: String,
        /// Ordinal the step carries.
        found: String,
        /// Ordinal expected at this position.
        expected: String,
    },

    /// A link target does not use the expected scheme.
    #[error("link for `{name}` must start with `{scheme}`, got `{url}`")]
    InvalidUrl {
        /// Display name of the link.
        name: String,
        /// Offending URL.
        url: String,
        /// Required scheme prefix.
        scheme: &'static str,
    },

    /// The contact address is not a plain `local@domain` address.
    #[error("`{0}` is not a valid e-mail address")]
    InvalidEmail(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
