use dns_annotations::annotations::{ANNOTATION_PREFIX, TTL_ANNOTATION_KEY};
use dns_annotations::rr::{SrvValues, TimeToLive};
use dns_annotations::{AnnotationKeys, Annotations};

mod support;
use support::{annotations, subscribe};

#[test]
fn keys_from_json_document() {
    subscribe();
    let keys: AnnotationKeys = serde_json::from_value(serde_json::json!({
        "ttl": "dns.example.com/ttl",
        "srv_priority": "dns.example.com/priority",
        "srv_weight": "dns.example.com/weight",
        "srv_port": "dns.example.com/port",
    }))
    .unwrap();

    let map = annotations([
        ("dns.example.com/ttl", "5m"),
        (TTL_ANNOTATION_KEY, "1"),
        ("dns.example.com/priority", "10"),
        ("dns.example.com/weight", "20"),
        ("dns.example.com/port", "5060"),
    ]);

    assert_eq!(keys.ttl(&map), Ok(TimeToLive::from_secs(300)));
    assert_eq!(keys.srv_values("sip", &map), Ok(SrvValues::new(10, 20, 5060)));
    assert_eq!(keys.hostname, AnnotationKeys::DEFAULT.hostname);
}

#[test]
fn keys_serialize_round_trip() {
    let keys = AnnotationKeys::with_prefix("dns.example.com/");
    let document = serde_json::to_string(&keys).unwrap();
    let parsed: AnnotationKeys = serde_json::from_str(&document).unwrap();
    assert_eq!(parsed, keys);
    assert_eq!(parsed.ttl, "dns.example.com/ttl");
}

#[test]
fn empty_document_is_default() {
    let keys: AnnotationKeys = serde_json::from_str("{}").unwrap();
    assert_eq!(keys, AnnotationKeys::default());
    assert_eq!(keys.provider_prefix, ANNOTATION_PREFIX);
}

#[test]
fn custom_prefix_provider_specific() {
    let keys = AnnotationKeys::with_prefix("dns.example.com/");
    let map = annotations([
        ("dns.example.com/aws-weight", "10"),
        ("external-dns.alpha.kubernetes.io/aws-weight", "20"),
        ("dns.example.com/alias", "true"),
    ]);

    let properties = keys.provider_specific(&map);
    assert_eq!(properties.len(), 2);
    assert_eq!(properties.get("aws/weight"), Some("10"));
    assert_eq!(properties.get("alias"), Some("true"));
    assert_eq!(map.annotations().count(), 3);
}
