use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single provider specific setting, e.g. `aws/evaluate-target-health`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProviderSpecificProperty {
    pub name: String,
    pub value: String,
}

impl ProviderSpecificProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ProviderSpecificProperty {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Provider specific settings, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderSpecific(Vec<ProviderSpecificProperty>);

impl ProviderSpecific {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|property| property.name == name)
            .map(|property| property.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProviderSpecificProperty> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ProviderSpecificProperty> for ProviderSpecific {
    fn from_iter<T: IntoIterator<Item = ProviderSpecificProperty>>(iter: T) -> Self {
        let mut properties: Vec<_> = iter.into_iter().collect();
        properties.sort();
        ProviderSpecific(properties)
    }
}

impl IntoIterator for ProviderSpecific {
    type Item = ProviderSpecificProperty;
    type IntoIter = std::vec::IntoIter<ProviderSpecificProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Which load balancer address a record should point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown access value {0:?}, expected \"public\" or \"private\"")]
pub struct UnknownAccess(String);

impl FromStr for Access {
    type Err = UnknownAccess;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Access::Public),
            "private" => Ok(Access::Private),
            other => Err(UnknownAccess(other.to_owned())),
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Public => f.write_str("public"),
            Access::Private => f.write_str("private"),
        }
    }
}
