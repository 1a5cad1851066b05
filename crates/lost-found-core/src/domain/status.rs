//! Item Status
//!
//! Lost/found state of an item and the status filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Whether an item is still being looked for or has been recovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Lost,
    Found,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Lost, Status::Found];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Lost => "lost",
            Status::Found => "found",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Status::Lost => Status::Found,
            Status::Found => Status::Lost,
        }
    }

    /// Badge shown on cards and in the detail view
    pub fn badge_label(&self) -> &'static str {
        match self {
            Status::Lost => "🔍 찾는 중",
            Status::Found => "✨ 발견!",
        }
    }

    /// Option text in the registration form
    pub fn form_label(&self) -> &'static str {
        match self {
            Status::Lost => "😢 잃어버렸어요",
            Status::Found => "🎉 찾았어요",
        }
    }

    /// Text of the detail view button that flips this status
    pub fn toggle_action_label(&self) -> &'static str {
        match self {
            Status::Lost => "💎 찾았어요!",
            Status::Found => "🔍 찾는 중",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(Status::Lost),
            "found" => Ok(Status::Found),
            other => Err(CatalogError::UnknownStatus(other.to_string())),
        }
    }
}

/// Status selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn options() -> impl Iterator<Item = StatusFilter> {
        std::iter::once(StatusFilter::All).chain(Status::ALL.into_iter().map(StatusFilter::Only))
    }

    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "🌟 모든 상태",
            StatusFilter::Only(Status::Lost) => "😢 잃어버림",
            StatusFilter::Only(Status::Found) => "🎉 발견됨",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}
