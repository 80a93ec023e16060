//! Annotation maps and the keys used to read DNS settings from them.
//!
//! Resources carry their DNS configuration as string annotations. The [`Annotations`] trait
//! abstracts over the map type the caller holds, and [`AnnotationKeys`] names the keys that
//! each setting is read from.

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};

/// Prefix shared by every default annotation key.
pub const ANNOTATION_PREFIX: &str = "external-dns.alpha.kubernetes.io/";

pub const CONTROLLER_ANNOTATION_KEY: &str = "external-dns.alpha.kubernetes.io/controller";
pub const HOSTNAME_ANNOTATION_KEY: &str = "external-dns.alpha.kubernetes.io/hostname";
pub const INTERNAL_HOSTNAME_ANNOTATION_KEY: &str =
    "external-dns.alpha.kubernetes.io/internal-hostname";
pub const ACCESS_ANNOTATION_KEY: &str = "external-dns.alpha.kubernetes.io/access";
pub const TARGET_ANNOTATION_KEY: &str = "external-dns.alpha.kubernetes.io/target";
pub const TTL_ANNOTATION_KEY: &str = "external-dns.alpha.kubernetes.io/ttl";
pub const ALIAS_ANNOTATION_KEY: &str = "external-dns.alpha.kubernetes.io/alias";
pub const SET_IDENTIFIER_ANNOTATION_KEY: &str = "external-dns.alpha.kubernetes.io/set-identifier";
pub const CLOUDFLARE_PROXIED_ANNOTATION_KEY: &str =
    "external-dns.alpha.kubernetes.io/cloudflare-proxied";
pub const SRV_PRIORITY_ANNOTATION_KEY: &str = "external-dns.alpha.kubernetes.io/srv-priority";
pub const SRV_WEIGHT_ANNOTATION_KEY: &str = "external-dns.alpha.kubernetes.io/srv-weight";
pub const SRV_PORT_ANNOTATION_KEY: &str = "external-dns.alpha.kubernetes.io/srv-port";

/// Value of the controller annotation which marks a resource as ours.
pub const CONTROLLER_ANNOTATION_VALUE: &str = "dns-controller";

/// Smallest TTL accepted from an annotation, in seconds.
pub const TTL_MINIMUM: i64 = 1;

/// Largest TTL accepted from an annotation, in seconds (2^32 - 1).
pub const TTL_MAXIMUM: i64 = u32::MAX as i64;

pub const PORT_MINIMUM: i64 = 0;
pub const PORT_MAXIMUM: i64 = u16::MAX as i64;

/// Read-only access to the annotations attached to a resource.
///
/// Keys are case sensitive.
pub trait Annotations {
    /// Look up the value for a single annotation key.
    fn annotation(&self, key: &str) -> Option<&str>;

    /// Iterate over every annotation.
    fn annotations(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;
}

impl<K, V> Annotations for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }

    fn annotations(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.borrow(), v.as_ref())))
    }
}

impl<K, V, S> Annotations for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }

    fn annotations(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.borrow(), v.as_ref())))
    }
}

/// Pairs are searched in order, so the first occurrence of a key wins.
impl<K, V> Annotations for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn annotation(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    fn annotations(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}

impl<K, V, const N: usize> Annotations for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn annotation(&self, key: &str) -> Option<&str> {
        self.as_slice().annotation(key)
    }

    fn annotations(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        self.as_slice().annotations()
    }
}

impl<A> Annotations for &A
where
    A: Annotations + ?Sized,
{
    fn annotation(&self, key: &str) -> Option<&str> {
        (**self).annotation(key)
    }

    fn annotations(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        (**self).annotations()
    }
}

/// The annotation keys each DNS setting is read from.
///
/// Deserializing a partial document replaces only the keys it names:
///
/// ```
/// use dns_annotations::AnnotationKeys;
///
/// let keys: AnnotationKeys = serde_json::from_str(r#"{"ttl": "example.com/ttl"}"#).unwrap();
/// assert_eq!(keys.ttl, "example.com/ttl");
/// assert_eq!(keys.hostname, AnnotationKeys::DEFAULT.hostname);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotationKeys {
    pub controller: Cow<'static, str>,
    pub hostname: Cow<'static, str>,
    pub internal_hostname: Cow<'static, str>,
    pub access: Cow<'static, str>,
    pub target: Cow<'static, str>,
    pub ttl: Cow<'static, str>,
    pub alias: Cow<'static, str>,
    pub set_identifier: Cow<'static, str>,
    pub cloudflare_proxied: Cow<'static, str>,
    pub srv_priority: Cow<'static, str>,
    pub srv_weight: Cow<'static, str>,
    pub srv_port: Cow<'static, str>,

    /// Prefix under which provider specific annotations (`aws-*`, `scw-*`) are found.
    pub provider_prefix: Cow<'static, str>,
}

impl AnnotationKeys {
    pub const DEFAULT: AnnotationKeys = AnnotationKeys {
        controller: Cow::Borrowed(CONTROLLER_ANNOTATION_KEY),
        hostname: Cow::Borrowed(HOSTNAME_ANNOTATION_KEY),
        internal_hostname: Cow::Borrowed(INTERNAL_HOSTNAME_ANNOTATION_KEY),
        access: Cow::Borrowed(ACCESS_ANNOTATION_KEY),
        target: Cow::Borrowed(TARGET_ANNOTATION_KEY),
        ttl: Cow::Borrowed(TTL_ANNOTATION_KEY),
        alias: Cow::Borrowed(ALIAS_ANNOTATION_KEY),
        set_identifier: Cow::Borrowed(SET_IDENTIFIER_ANNOTATION_KEY),
        cloudflare_proxied: Cow::Borrowed(CLOUDFLARE_PROXIED_ANNOTATION_KEY),
        srv_priority: Cow::Borrowed(SRV_PRIORITY_ANNOTATION_KEY),
        srv_weight: Cow::Borrowed(SRV_WEIGHT_ANNOTATION_KEY),
        srv_port: Cow::Borrowed(SRV_PORT_ANNOTATION_KEY),
        provider_prefix: Cow::Borrowed(ANNOTATION_PREFIX),
    };

    /// Build a set of keys which all share a custom prefix instead of [`ANNOTATION_PREFIX`].
    pub fn with_prefix(prefix: &str) -> Self {
        let key = |name: &str| Cow::Owned(format!("{prefix}{name}"));
        AnnotationKeys {
            controller: key("controller"),
            hostname: key("hostname"),
            internal_hostname: key("internal-hostname"),
            access: key("access"),
            target: key("target"),
            ttl: key("ttl"),
            alias: key("alias"),
            set_identifier: key("set-identifier"),
            cloudflare_proxied: key("cloudflare-proxied"),
            srv_priority: key("srv-priority"),
            srv_weight: key("srv-weight"),
            srv_port: key("srv-port"),
            provider_prefix: Cow::Owned(prefix.to_owned()),
        }
    }
}

impl Default for AnnotationKeys {
    fn default() -> Self {
        AnnotationKeys::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefix_matches_constants() {
        assert_eq!(AnnotationKeys::with_prefix(ANNOTATION_PREFIX), AnnotationKeys::DEFAULT);
    }

    #[test]
    fn bounds() {
        assert_eq!(TTL_MAXIMUM, (1i64 << 32) - 1);
        assert_eq!(PORT_MAXIMUM, 65535);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let map: BTreeMap<String, String> = [(TTL_ANNOTATION_KEY.to_owned(), "60".to_owned())]
            .into_iter()
            .collect();
        assert_eq!(map.annotation(TTL_ANNOTATION_KEY), Some("60"));
        assert_eq!(map.annotation(&TTL_ANNOTATION_KEY.to_uppercase()), None);
    }

    #[test]
    fn slice_first_match_wins() {
        let pairs = [("a", "1"), ("a", "2")];
        assert_eq!(pairs.annotation("a"), Some("1"));
        assert_eq!(pairs.annotations().count(), 2);
    }

    #[test]
    fn hash_map_lookup() {
        let map: HashMap<&str, &str> = [("a", "1")].into_iter().collect();
        assert_eq!(map.annotation("a"), Some("1"));
        assert_eq!(map.annotation("b"), None);
    }

    #[test]
    fn keys_from_partial_json() {
        let keys: AnnotationKeys =
            serde_json::from_str(r#"{"srv_port": "example.com/port"}"#).unwrap();
        assert_eq!(keys.srv_port, "example.com/port");
        assert_eq!(keys.srv_weight, SRV_WEIGHT_ANNOTATION_KEY);
    }

    #[test]
    fn keys_reject_unknown_fields() {
        assert!(serde_json::from_str::<AnnotationKeys>(r#"{"tll": "x"}"#).is_err());
    }
}
