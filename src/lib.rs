//! Typed, bounds-checked DNS record settings read from resource annotations.
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use dns_annotations::rr::{SuitableType, TimeToLive};
//! use dns_annotations::{source, annotations::TTL_ANNOTATION_KEY};
//!
//! let mut annotations = BTreeMap::new();
//! annotations.insert(TTL_ANNOTATION_KEY.to_owned(), "10m".to_owned());
//!
//! assert_eq!(source::ttl_from_annotations(&annotations), Ok(TimeToLive::from_secs(600)));
//! assert_eq!(dns_annotations::rr::suitable_type("8.8.8.8"), SuitableType::A);
//! ```

pub mod annotations;
pub mod error;
pub mod rr;
pub mod source;

pub use self::annotations::{AnnotationKeys, Annotations};
pub use self::error::{AnnotationError, ErrorKind, SrvField};
