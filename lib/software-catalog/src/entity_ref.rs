use std::fmt;
use std::str::FromStr;

use crate::entity::Kind;
use crate::{CatalogError, DEFAULT_NAMESPACE};

/// Identifies a single entity in the catalog by kind, namespace and name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EntityRef {
    pub kind: Kind,
    pub namespace: String,
    pub name: String,
}

impl EntityRef {
    pub fn new(kind: Kind, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}/{}",
            self.kind.to_string().to_ascii_lowercase(),
            self.namespace,
            self.name
        )
    }
}

impl FromStr for EntityRef {
    type Err = CatalogError;

    /// Parses `<kind>:[<namespace>/]<name>`. A ref without a namespace
    /// segment falls back to [`DEFAULT_NAMESPACE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| CatalogError::InvalidEntityRef(s.to_string()))?;
        let (namespace, name) = match rest.split_once('/') {
            Some((namespace, name)) => (namespace, name),
            None => (DEFAULT_NAMESPACE, rest),
        };

        if kind.is_empty() || namespace.is_empty() || name.is_empty() {
            return Err(CatalogError::InvalidEntityRef(s.to_string()));
        }

        let kind =
            Kind::from_str(kind).map_err(|_| CatalogError::UnknownKind(kind.to_string()))?;

        Ok(Self::new(kind, namespace, name))
    }
}
