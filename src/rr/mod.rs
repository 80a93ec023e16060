//! Typed DNS settings produced from annotations.

mod provider;
mod record_type;
mod srv;
mod ttl;

pub use self::provider::{Access, ProviderSpecific, ProviderSpecificProperty, UnknownAccess};
pub use self::record_type::{SuitableType, suitable_type};
pub use self::srv::SrvValues;
pub use self::ttl::TimeToLive;

/// Record type as understood by hickory-dns.
pub use hickory_proto::rr::RecordType;

/// Trait for converting types to their hickory-dns equivalents
///
/// This trait provides a consistent interface for handing annotation derived values
/// to code built on the hickory-dns ecosystem.
pub trait AsHickory {
    /// The corresponding hickory-dns type
    type Hickory;

    /// Convert this type to its hickory-dns equivalent
    fn as_hickory(&self) -> Self::Hickory;
}
