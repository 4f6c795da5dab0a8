//! AWS identifiers shared across CloudFormation shapes.

use std::fmt;
use std::str::FromStr;

use crate::StackformError;

/// AWS Account ID (12-digit string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Placeholder account ID used when none is configured.
    pub const DEFAULT: &'static str = "000000000000";

    /// Create a new account ID from a string.
    ///
    /// # Errors
    /// Returns an error if the account ID is not a 12-digit numeric string.
    pub fn new(id: impl Into<String>) -> Result<Self, StackformError> {
        let id = id.into();
        if !Self::is_valid(&id) {
            return Err(StackformError::InvalidAccountId(id));
        }
        Ok(Self(id))
    }

    /// Whether `id` is a well-formed account ID.
    #[must_use]
    pub fn is_valid(id: &str) -> bool {
        id.len() == 12 && id.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the account ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl FromStr for AccountId {
    type Err = StackformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// AWS Region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Region used when none is configured.
    pub const DEFAULT: &'static str = "us-east-1";

    /// Create a new region without checking its shape.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Parse a region, rejecting identifiers that are not shaped like
    /// `us-east-1` or `us-gov-west-1`.
    ///
    /// # Errors
    /// Returns [`StackformError::InvalidRegion`] for malformed identifiers.
    pub fn parse(region: impl Into<String>) -> Result<Self, StackformError> {
        let region = region.into();
        if !Self::is_well_formed(&region) {
            return Err(StackformError::InvalidRegion(region));
        }
        Ok(Self(region))
    }

    /// Whether `region` looks like an AWS region code.
    #[must_use]
    pub fn is_well_formed(region: &str) -> bool {
        let parts: Vec<&str> = region.split('-').collect();
        if parts.len() < 3 {
            return false;
        }
        let (first, rest) = (parts[0], &parts[1..]);
        let Some((last, middle)) = rest.split_last() else {
            return false;
        };
        first.len() == 2
            && first.bytes().all(|b| b.is_ascii_lowercase())
            && !last.is_empty()
            && last.bytes().all(|b| b.is_ascii_digit())
            && middle
                .iter()
                .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_lowercase()))
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
