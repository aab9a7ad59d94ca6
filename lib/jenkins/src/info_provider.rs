use std::collections::HashMap;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use software_catalog::{CatalogClient, Entity, EntityRef};
use tracing::debug;

use crate::config::JenkinsConfig;
use crate::errors::{JenkinsError, JenkinsResult};

/// Annotation carrying the `[instance:]job` binding for an entity.
pub const JENKINS_ANNOTATION: &str = "jenkins.io/job-slug";

/// Predecessor of [`JENKINS_ANNOTATION`]. Still honored, and wins when both
/// are present.
pub const JENKINS_LEGACY_ANNOTATION: &str = "jenkins.io/github-folder";

/// True when the entity carries either recognized annotation.
pub fn is_jenkins_available(entity: &Entity) -> bool {
    entity
        .find_annotation(&[JENKINS_LEGACY_ANNOTATION, JENKINS_ANNOTATION])
        .is_some()
}

/// Connection details for one Jenkins job, ready for an API call against the
/// owning server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JenkinsInfo {
    pub base_url: String,

    /// Headers to send with every request, carrying the Basic credentials.
    pub headers: Option<HashMap<String, String>>,

    pub job_name: String,
}

/// Maps a catalog entity to the Jenkins instance and job that build it.
#[async_trait::async_trait]
pub trait JenkinsInfoProvider: Send + Sync {
    /// Resolves connection info for `entity_ref`. A caller supplied
    /// `job_name` replaces the job slug carried by the annotation.
    async fn resolve(
        &self,
        entity_ref: &EntityRef,
        job_name: Option<&str>,
    ) -> JenkinsResult<JenkinsInfo>;
}

/// Resolves against the catalog and the `jenkins` configuration subtree.
///
/// The annotation value reads `[instance:]job`. The part before the first
/// colon names a configured instance and everything after it is the job.
/// With no colon the whole value is the job and the default instance is
/// used.
#[derive(Clone)]
pub struct DefaultJenkinsInfoProvider {
    catalog: Arc<dyn CatalogClient>,
    config: JenkinsConfig,
}

impl DefaultJenkinsInfoProvider {
    pub fn new(catalog: Arc<dyn CatalogClient>, config: JenkinsConfig) -> Self {
        Self { catalog, config }
    }
}

#[async_trait::async_trait]
impl JenkinsInfoProvider for DefaultJenkinsInfoProvider {
    async fn resolve(
        &self,
        entity_ref: &EntityRef,
        job_name: Option<&str>,
    ) -> JenkinsResult<JenkinsInfo> {
        let entity = self
            .catalog
            .get_entity_by_ref(entity_ref)
            .await?
            .ok_or_else(|| JenkinsError::EntityNotFound(entity_ref.clone()))?;

        let annotation = entity
            .find_annotation(&[JENKINS_LEGACY_ANNOTATION, JENKINS_ANNOTATION])
            .ok_or_else(|| JenkinsError::AnnotationMissing(entity_ref.clone()))?;

        let (instance_name, job_slug) = match annotation.split_once(':') {
            Some((instance, job)) => (Some(instance), job),
            None => (None, annotation),
        };

        let instance = self.config.instance(instance_name)?;
        let (base_url, username, api_key) = instance.connection()?;

        let job_name = job_name.unwrap_or(job_slug);
        debug!(
            entity = %entity_ref,
            instance = instance.label(),
            job = job_name,
            "resolved jenkins job"
        );

        Ok(JenkinsInfo {
            base_url,
            headers: Some(HashMap::from([(
                "Authorization".to_string(),
                basic_authorization(&username, &api_key),
            )])),
            job_name: job_name.to_string(),
        })
    }
}

/// Provider returning fixed info for local development, no catalog or
/// configuration needed. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct DummyJenkinsInfoProvider;

#[async_trait::async_trait]
impl JenkinsInfoProvider for DummyJenkinsInfoProvider {
    async fn resolve(
        &self,
        _entity_ref: &EntityRef,
        _job_name: Option<&str>,
    ) -> JenkinsResult<JenkinsInfo> {
        Ok(JenkinsInfo {
            base_url: "https://jenkins.example.com".to_string(),
            headers: Some(HashMap::from([(
                "Authorization".to_string(),
                // admin:password
                "Basic YWRtaW46cGFzc3dvcmQ=".to_string(),
            )])),
            job_name: "department-A/team-1/project-foo".to_string(),
        })
    }
}

fn basic_authorization(username: &str, api_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{api_key}")))
}
