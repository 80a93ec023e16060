use crate::annotations::{AnnotationKeys, Annotations};
use crate::rr::{ProviderSpecific, ProviderSpecificProperty};

/// Annotation suffixes forwarded to a provider, and the namespace they are forwarded under.
const PROVIDER_NAMESPACES: &[(&str, &str)] = &[("aws-", "aws/"), ("scw-", "scw/")];

impl AnnotationKeys {
    /// Collect settings which only make sense to a particular DNS provider.
    ///
    /// `<prefix>aws-<name>` becomes `aws/<name>`, `<prefix>scw-<name>` becomes `scw/<name>`, and
    /// the Cloudflare proxy toggle is passed through under its full key. An alias annotation adds
    /// `alias=true`.
    pub fn provider_specific<A>(&self, annotations: &A) -> ProviderSpecific
    where
        A: Annotations + ?Sized,
    {
        let mut properties = Vec::new();

        if self.alias(annotations) {
            properties.push(ProviderSpecificProperty::new("alias", "true"));
        }

        if let Some(value) = annotations.annotation(&self.cloudflare_proxied) {
            properties.push(ProviderSpecificProperty::new(
                &*self.cloudflare_proxied,
                value,
            ));
        }

        for (key, value) in annotations.annotations() {
            let Some(name) = key.strip_prefix(&*self.provider_prefix) else {
                continue;
            };
            for (suffix, namespace) in PROVIDER_NAMESPACES {
                if let Some(attribute) = name.strip_prefix(suffix) {
                    properties.push(ProviderSpecificProperty::new(
                        format!("{namespace}{attribute}"),
                        value,
                    ));
                }
            }
        }

        tracing::trace!(n = properties.len(), "provider specific properties");
        properties.into_iter().collect()
    }
}

pub fn provider_specific_from_annotations<A>(annotations: &A) -> ProviderSpecific
where
    A: Annotations + ?Sized,
{
    AnnotationKeys::DEFAULT.provider_specific(annotations)
}
