use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use hickory_proto::rr::RecordType;
use serde::{Deserialize, Serialize};

/// Record type inferred from the shape of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum SuitableType {
    /// The target is an IPv4 address literal.
    A,

    /// The target is a hostname, and so must be aliased.
    CNAME,
}

impl SuitableType {
    /// Classify a target: dotted-decimal IPv4 literals are published as `A` records, and
    /// anything else (including load balancer hostnames) as a `CNAME`.
    ///
    /// IPv6 literals are not recognised and classify as `CNAME`, since there is no `AAAA`
    /// variant and an IPv6 address can't be carried by an `A` record.
    pub fn for_target(target: &str) -> Self {
        match Ipv4Addr::from_str(target) {
            Ok(_) => SuitableType::A,
            Err(_) => SuitableType::CNAME,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuitableType::A => "A",
            SuitableType::CNAME => "CNAME",
        }
    }
}

impl fmt::Display for SuitableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SuitableType> for RecordType {
    fn from(value: SuitableType) -> Self {
        match value {
            SuitableType::A => RecordType::A,
            SuitableType::CNAME => RecordType::CNAME,
        }
    }
}

impl super::AsHickory for SuitableType {
    type Hickory = RecordType;

    fn as_hickory(&self) -> Self::Hickory {
        (*self).into()
    }
}

/// Pick the record type for a target, see [`SuitableType::for_target`].
pub fn suitable_type(target: &str) -> SuitableType {
    SuitableType::for_target(target)
}
