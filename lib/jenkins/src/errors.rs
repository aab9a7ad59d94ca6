use software_catalog::{CatalogError, EntityRef};
use thiserror::Error;

#[remain::sorted]
#[derive(Debug, Error)]
pub enum JenkinsError {
    #[error(
        "entity `{0}` has neither the `jenkins.io/github-folder` nor the `jenkins.io/job-slug` annotation"
    )]
    AnnotationMissing(EntityRef),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("jenkins instance `{instance}` has no value for `{field}`")]
    ConfigFieldMissing {
        instance: String,
        field: &'static str,
    },

    #[error("entity `{0}` was not found in the catalog")]
    EntityNotFound(EntityRef),

    #[error(transparent)]
    Figment(#[from] figment::Error),

    #[error("no jenkins instance named `{0}` under `jenkins.instances`")]
    NamedInstanceNotFound(String),

    #[error(
        "no default jenkins instance: `jenkins.instances` has no `default` entry and the flat `jenkins` settings are incomplete"
    )]
    NoDefaultInstance,
}

pub type JenkinsResult<T> = Result<T, JenkinsError>;
