use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::annotations::{TTL_MAXIMUM, TTL_MINIMUM};
use crate::error::AnnotationError;

/// Record TTL in seconds.
///
/// Zero is reserved to mean "not configured": an annotation which sets a TTL must name a value in
/// `[1, 2^32 - 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeToLive(u32);

impl TimeToLive {
    pub const MAX: TimeToLive = TimeToLive(u32::MAX);
    pub const MIN: TimeToLive = TimeToLive(TTL_MINIMUM as u32);
    pub const UNSET: TimeToLive = TimeToLive(0u32);

    pub fn from_secs(secs: u32) -> Self {
        TimeToLive(secs)
    }

    /// Range checked constructor for a TTL that was explicitly configured.
    pub fn try_from_secs(secs: i64) -> Result<Self, AnnotationError> {
        if !(TTL_MINIMUM..=TTL_MAXIMUM).contains(&secs) {
            return Err(AnnotationError::TtlOutOfRange {
                min: TTL_MINIMUM,
                max: TTL_MAXIMUM,
            });
        }

        Ok(TimeToLive(secs as u32))
    }

    pub fn as_secs(&self) -> u32 {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for TimeToLive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TimeToLive {
    fn from(value: u32) -> Self {
        TimeToLive(value)
    }
}

impl From<TimeToLive> for u32 {
    fn from(value: TimeToLive) -> Self {
        value.0
    }
}

/// Sub-second precision is truncated.
impl TryFrom<Duration> for TimeToLive {
    type Error = AnnotationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        let secs = i64::try_from(value.as_secs()).unwrap_or(i64::MAX);
        TimeToLive::try_from_secs(secs)
    }
}

impl From<TimeToLive> for Duration {
    fn from(value: TimeToLive) -> Self {
        Duration::from_secs(value.0 as u64)
    }
}

impl super::AsHickory for TimeToLive {
    type Hickory = u32;

    fn as_hickory(&self) -> Self::Hickory {
        self.0
    }
}
