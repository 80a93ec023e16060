use crate::annotations::{AnnotationKeys, Annotations};
use crate::error::AnnotationError;
use crate::rr::TimeToLive;

use super::duration::{self, DurationError};

/// Parse a TTL written either as a duration expression or as plain seconds.
fn parse_ttl(value: &str) -> Result<i64, DurationError> {
    match duration::parse_seconds(value) {
        Ok(secs) => Ok(secs),
        Err(error) => value.parse::<i64>().map_err(|_| error),
    }
}

impl AnnotationKeys {
    /// Read the record TTL from annotations.
    ///
    /// A missing annotation yields [`TimeToLive::UNSET`]. A present annotation must hold either
    /// a duration (`10m`, `20.5s`) or a whole number of seconds, and must land within
    /// `[TTL_MINIMUM, TTL_MAXIMUM]`. Fractional seconds are truncated.
    #[tracing::instrument("ttl", skip_all, level = "trace")]
    pub fn ttl<A>(&self, annotations: &A) -> Result<TimeToLive, AnnotationError>
    where
        A: Annotations + ?Sized,
    {
        let Some(value) = annotations.annotation(&self.ttl) else {
            tracing::trace!(key = %self.ttl, "no ttl annotation");
            return Ok(TimeToLive::UNSET);
        };

        let secs = parse_ttl(value).map_err(|error| {
            tracing::trace!(%error, "ttl annotation is neither a duration nor an integer");
            AnnotationError::InvalidTtl {
                value: value.to_owned(),
            }
        })?;

        let ttl = TimeToLive::try_from_secs(secs)?;
        tracing::trace!(%ttl, "parsed ttl annotation");
        Ok(ttl)
    }
}

/// Read the record TTL using the default annotation keys, see [`AnnotationKeys::ttl`].
pub fn ttl_from_annotations<A>(annotations: &A) -> Result<TimeToLive, AnnotationError>
where
    A: Annotations + ?Sized,
{
    AnnotationKeys::DEFAULT.ttl(annotations)
}
