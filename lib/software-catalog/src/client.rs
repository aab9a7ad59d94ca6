use serde::Deserialize;
use tracing::debug;

use crate::entity::Entity;
use crate::entity_ref::EntityRef;
use crate::CatalogResult;

#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Resolves a reference to the entity it names, or `None` when the
    /// catalog holds no such entity. Transport failures surface as errors
    /// and are not handled here.
    async fn get_entity_by_ref(&self, entity_ref: &EntityRef) -> CatalogResult<Option<Entity>>;
}

// TODO: add a client backed by the catalog REST api
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalogClient {
    entities: Vec<Entity>,
}

impl InMemoryCatalogClient {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Loads entities from descriptor YAML, one entity per document.
    pub fn from_yaml(content: &str) -> CatalogResult<Self> {
        let mut entities = Vec::new();
        for document in serde_yaml::Deserializer::from_str(content) {
            entities.push(Entity::deserialize(document)?);
        }

        debug!(count = entities.len(), "loaded entities from descriptor yaml");
        Ok(Self { entities })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

#[async_trait::async_trait]
impl CatalogClient for InMemoryCatalogClient {
    async fn get_entity_by_ref(&self, entity_ref: &EntityRef) -> CatalogResult<Option<Entity>> {
        Ok(self
            .entities
            .iter()
            .find(|entity| entity.matches_ref(entity_ref))
            .cloned())
    }
}
