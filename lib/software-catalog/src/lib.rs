pub mod client;
pub mod entity;
pub mod entity_ref;

use thiserror::Error;

pub use crate::client::{CatalogClient, InMemoryCatalogClient};
pub use crate::entity::{Entity, Kind, Link, Metadata};
pub use crate::entity_ref::EntityRef;

/// Namespace assumed for entities and refs that do not carry one.
pub const DEFAULT_NAMESPACE: &str = "default";

#[remain::sorted]
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid entity ref `{0}`, expected <kind>:[<namespace>/]<name>")]
    InvalidEntityRef(String),

    #[error("yaml serialize/deserialize error: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("catalog transport error: {0}")]
    Transport(String),

    #[error("unknown entity kind `{0}`")]
    UnknownKind(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
