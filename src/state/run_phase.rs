//! Run phase definitions
//!
//! A run walks through its phases strictly in order, once each:
//! `FetchPrimary -> FetchDetail -> PublishAll -> Done`.

use crate::SyncError;
use std::fmt;

/// The phase a run is currently executing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunPhase {
    /// Fetching primary records for every identifier in the range
    FetchPrimary,

    /// Fetching species detail for every primary record
    FetchDetail,

    /// Mapping and publishing every eligible entity
    PublishAll,

    /// All phases finished
    Done,
}

impl RunPhase {
    /// Returns the phase that follows this one, or None for `Done`
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::FetchPrimary => Some(Self::FetchDetail),
            Self::FetchDetail => Some(Self::PublishAll),
            Self::PublishAll => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns true if `to` directly follows this phase
    pub fn can_transition_to(&self, to: Self) -> bool {
        self.next() == Some(to)
    }

    /// Validates a transition and returns the new phase
    pub fn transition(self, to: Self) -> Result<Self, SyncError> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(SyncError::InvalidTransition { from: self, to })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchPrimary => "fetch-primary",
            Self::FetchDetail => "fetch-detail",
            Self::PublishAll => "publish-all",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
