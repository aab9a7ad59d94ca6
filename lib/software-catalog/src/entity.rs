use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::entity_ref::EntityRef;
use crate::DEFAULT_NAMESPACE;

// https://backstage.io/docs/features/software-catalog/descriptor-format

#[remain::sorted]
#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Kind {
    #[serde(rename = "API")]
    #[strum(serialize = "API")]
    Api,
    Component,
    Domain,
    Group,
    Location,
    Resource,
    System,
    Template,
    User,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub icon: Option<String>,

    #[serde(rename = "type")]
    pub link_type: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Metadata {
    pub name: String,
    pub title: Option<String>,
    pub description: Option<String>,

    /// Assigned by the catalog on ingestion.
    pub uid: Option<String>,
    pub namespace: Option<String>,

    #[serde(default)]
    pub labels: HashMap<String, String>,

    #[serde(default)]
    pub annotations: HashMap<String, String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub api_version: String,
    pub kind: Kind,
    pub metadata: Metadata,

    /// Kind-specific body, kept free-form.
    #[serde(default)]
    pub spec: serde_json::Value,
}

impl Entity {
    /// Namespace the entity lives in, falling back to [`DEFAULT_NAMESPACE`].
    pub fn namespace(&self) -> &str {
        self.metadata
            .namespace
            .as_deref()
            .unwrap_or(DEFAULT_NAMESPACE)
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata.annotations.get(key).map(String::as_str)
    }

    /// First value among `keys` that is present on the entity, in the order given.
    pub fn find_annotation(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.annotation(key))
    }

    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.kind, self.namespace(), self.metadata.name.clone())
    }

    /// Whether `entity_ref` names this entity. Namespaces compare
    /// case-insensitively, names exactly.
    pub fn matches_ref(&self, entity_ref: &EntityRef) -> bool {
        self.kind == entity_ref.kind
            && self.namespace().eq_ignore_ascii_case(&entity_ref.namespace)
            && self.metadata.name == entity_ref.name
    }
}
