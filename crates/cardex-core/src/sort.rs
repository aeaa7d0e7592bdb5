//! Known catalog sort keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned for an unrecognized sort key name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

/// A catalog sort key, named by its wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Total downloads (the catalog default).
    #[default]
    DownloadCount,
    /// Stars / favorites.
    StarCount,
    /// Catalog id (roughly creation order).
    Id,
    /// Average rating.
    Rating,
    /// Number of ratings.
    RatingCount,
    /// Most recent activity.
    #[serde(rename = "last_activity_at")]
    LastActivity,
    /// Creation timestamp.
    CreatedAt,
    /// Alphabetical by name.
    Name,
}

impl SortKey {
    /// The wire name sent in the encoded query.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::DownloadCount => "download_count",
            Self::StarCount => "star_count",
            Self::Id => "id",
            Self::Rating => "rating",
            Self::RatingCount => "rating_count",
            Self::LastActivity => "last_activity_at",
            Self::CreatedAt => "created_at",
            Self::Name => "name",
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "download_count" => Ok(Self::DownloadCount),
            "star_count" => Ok(Self::StarCount),
            "id" => Ok(Self::Id),
            "rating" => Ok(Self::Rating),
            "rating_count" => Ok(Self::RatingCount),
            "last_activity_at" => Ok(Self::LastActivity),
            "created_at" => Ok(Self::CreatedAt),
            "name" => Ok(Self::Name),
            other => Err(UnknownSortKey(other.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}
