use std::collections::BTreeMap;

use crate::annotations::{AnnotationKeys, Annotations, CONTROLLER_ANNOTATION_VALUE};
use crate::rr::{Access, SuitableType};

/// Split a comma separated annotation, ignoring any spaces.
fn split_list(value: &str) -> Vec<String> {
    value.replace(' ', "").split(',').map(str::to_owned).collect()
}

impl AnnotationKeys {
    /// Hostnames requested for a resource, from a comma separated annotation.
    pub fn hostnames<A>(&self, annotations: &A) -> Vec<String>
    where
        A: Annotations + ?Sized,
    {
        annotations
            .annotation(&self.hostname)
            .map(split_list)
            .unwrap_or_default()
    }

    /// Hostnames to publish with the internal address of a resource.
    pub fn internal_hostnames<A>(&self, annotations: &A) -> Vec<String>
    where
        A: Annotations + ?Sized,
    {
        annotations
            .annotation(&self.internal_hostname)
            .map(split_list)
            .unwrap_or_default()
    }

    /// Explicit record targets, overriding those discovered from the resource.
    ///
    /// A single trailing dot is removed from each target.
    pub fn targets<A>(&self, annotations: &A) -> Vec<String>
    where
        A: Annotations + ?Sized,
    {
        match annotations.annotation(&self.target) {
            Some(value) if !value.is_empty() => split_list(value)
                .into_iter()
                .map(|mut target| {
                    if target.ends_with('.') {
                        target.pop();
                    }
                    target
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn alias<A>(&self, annotations: &A) -> bool
    where
        A: Annotations + ?Sized,
    {
        annotations.annotation(&self.alias) == Some("true")
    }

    /// Requested access, or `None` when absent or not understood.
    pub fn access<A>(&self, annotations: &A) -> Option<Access>
    where
        A: Annotations + ?Sized,
    {
        let value = annotations.annotation(&self.access)?;
        match value.parse() {
            Ok(access) => Some(access),
            Err(error) => {
                tracing::debug!(%error, "ignoring access annotation");
                None
            }
        }
    }

    pub fn set_identifier<'a, A>(&self, annotations: &'a A) -> Option<&'a str>
    where
        A: Annotations + ?Sized,
    {
        annotations.annotation(&self.set_identifier)
    }

    /// Whether a resource is ours to manage.
    ///
    /// Resources without a controller annotation are managed; otherwise the annotation must name
    /// [`CONTROLLER_ANNOTATION_VALUE`].
    pub fn is_managed<A>(&self, annotations: &A) -> bool
    where
        A: Annotations + ?Sized,
    {
        match annotations.annotation(&self.controller) {
            None => true,
            Some(CONTROLLER_ANNOTATION_VALUE) => true,
            Some(other) => {
                tracing::debug!(controller = other, "resource belongs to another controller");
                false
            }
        }
    }
}

/// Group targets by the record type they would be published as.
///
/// Order within each group follows the input.
pub fn group_targets_by_type<I, T>(targets: I) -> BTreeMap<SuitableType, Vec<T>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut groups: BTreeMap<SuitableType, Vec<T>> = BTreeMap::new();
    for target in targets {
        groups
            .entry(SuitableType::for_target(target.as_ref()))
            .or_default()
            .push(target);
    }
    groups
}

pub fn hostnames_from_annotations<A>(annotations: &A) -> Vec<String>
where
    A: Annotations + ?Sized,
{
    AnnotationKeys::DEFAULT.hostnames(annotations)
}

pub fn internal_hostnames_from_annotations<A>(annotations: &A) -> Vec<String>
where
    A: Annotations + ?Sized,
{
    AnnotationKeys::DEFAULT.internal_hostnames(annotations)
}

pub fn targets_from_annotations<A>(annotations: &A) -> Vec<String>
where
    A: Annotations + ?Sized,
{
    AnnotationKeys::DEFAULT.targets(annotations)
}

pub fn alias_from_annotations<A>(annotations: &A) -> bool
where
    A: Annotations + ?Sized,
{
    AnnotationKeys::DEFAULT.alias(annotations)
}

pub fn access_from_annotations<A>(annotations: &A) -> Option<Access>
where
    A: Annotations + ?Sized,
{
    AnnotationKeys::DEFAULT.access(annotations)
}

pub fn set_identifier_from_annotations<A>(annotations: &A) -> Option<&str>
where
    A: Annotations + ?Sized,
{
    AnnotationKeys::DEFAULT.set_identifier(annotations)
}

pub fn is_managed<A>(annotations: &A) -> bool
where
    A: Annotations + ?Sized,
{
    AnnotationKeys::DEFAULT.is_managed(annotations)
}
