//! Extraction of DNS settings from resource annotations.
//!
//! Each function here reads from the default annotation keys. The same operations are available
//! as methods on [`AnnotationKeys`](crate::AnnotationKeys) for callers which configure their own keys.

mod duration;
mod hostname;
mod provider;
mod srv;
mod ttl;

pub use self::hostname::{
    access_from_annotations, alias_from_annotations, group_targets_by_type,
    hostnames_from_annotations, internal_hostnames_from_annotations, is_managed,
    set_identifier_from_annotations, targets_from_annotations,
};
pub use self::provider::provider_specific_from_annotations;
pub use self::srv::srv_values_from_annotations;
pub use self::ttl::ttl_from_annotations;
