// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extra database connection settings.
//!
//! `database_extra` is merged by the hosting framework into its database connection
//! settings. It is either empty or carries TLS options with certificate verification
//! turned off. No other shape can be built or deserialized.

use crate::domain::errors::ConfigError;
use crate::domain::RuntimeMode;
use serde::{Deserialize, Serialize};

/// TLS options for the database connection.
///
/// The only value is [`SslOptions::unverified`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SslOptions {
    reject_unauthorized: bool,
}

impl SslOptions {
    /// TLS without certificate verification.
    pub fn unverified() -> Self {
        Self {
            reject_unauthorized: false,
        }
    }

    /// Whether TLS connections with unverifiable certificates are rejected.
    pub fn reject_unauthorized(&self) -> bool {
        self.reject_unauthorized
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSslOptions {
    #[serde(rename = "rejectUnauthorized")]
    reject_unauthorized: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDatabaseExtra {
    #[serde(default)]
    ssl: Option<RawSslOptions>,
}

impl TryFrom<RawDatabaseExtra> for DatabaseExtra {
    type Error = ConfigError;

    fn try_from(raw: RawDatabaseExtra) -> Result<Self, Self::Error> {
        match raw.ssl {
            None => Ok(Self::empty()),
            Some(RawSslOptions {
                reject_unauthorized: false,
            }) => Ok(Self::unverified_tls()),
            Some(_) => Err(ConfigError::ParseError {
                message: "database_extra.ssl.rejectUnauthorized must be false".to_string(),
                source: None,
            }),
        }
    }
}

/// The `database_extra` configuration fragment.
///
/// Serializes to `{}` when empty and to `{"ssl":{"rejectUnauthorized":false}}`
/// otherwise.
///
/// # Examples
///
/// ```
/// use storecfg::domain::{DatabaseExtra, RuntimeMode};
///
/// assert!(DatabaseExtra::for_mode(&RuntimeMode::Development).is_empty());
///
/// let extra = DatabaseExtra::for_mode(&RuntimeMode::from("production"));
/// assert_eq!(extra.ssl().map(|s| s.reject_unauthorized()), Some(false));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDatabaseExtra")]
pub struct DatabaseExtra {
    #[serde(skip_serializing_if = "Option::is_none")]
    ssl: Option<SslOptions>,
}

impl DatabaseExtra {
    /// The empty fragment used in development.
    pub fn empty() -> Self {
        Self { ssl: None }
    }

    /// The fragment used outside development: TLS with verification disabled.
    pub fn unverified_tls() -> Self {
        Self {
            ssl: Some(SslOptions::unverified()),
        }
    }

    /// Selects the fragment for a runtime mode.
    pub fn for_mode(mode: &RuntimeMode) -> Self {
        if mode.is_development() {
            Self::empty()
        } else {
            Self::unverified_tls()
        }
    }

    /// Returns the TLS options, if any.
    pub fn ssl(&self) -> Option<&SslOptions> {
        self.ssl.as_ref()
    }

    /// Returns `true` when the fragment has no keys.
    pub fn is_empty(&self) -> bool {
        self.ssl.is_none()
    }
}
