use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde_derive::{Deserialize, Serialize};

use crate::errors::{JenkinsError, JenkinsResult};

/// Instance name used when an annotation names no instance.
pub const DEFAULT_INSTANCE_NAME: &str = "default";

/// The `jenkins` subtree of the layered configuration.
///
/// Either the flat fields describe a single unnamed server, or `instances`
/// lists named servers, one of which may be called `default`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JenkinsConfig {
    #[serde(alias = "baseUrl")]
    pub base_url: Option<String>,

    pub username: Option<String>,

    #[serde(alias = "apiKey")]
    pub api_key: Option<String>,

    /// Named servers, checked in order.
    #[serde(default)]
    pub instances: Vec<JenkinsInstanceConfig>,
}

/// Connection settings for a single Jenkins server.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JenkinsInstanceConfig {
    /// Name annotation prefixes select this server by. Absent for the
    /// synthesized flat form.
    pub name: Option<String>,

    #[serde(alias = "baseUrl")]
    pub base_url: Option<String>,

    pub username: Option<String>,

    #[serde(alias = "apiKey")]
    pub api_key: Option<String>,
}

impl JenkinsConfig {
    /// Reads `path` as TOML layered under environment variables prefixed
    /// `JENKINS_`, then extracts the `jenkins` subtree. A missing file is not
    /// an error, the environment layer alone can satisfy the tree.
    pub fn load(path: impl AsRef<Path>) -> JenkinsResult<Self> {
        let figment = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("JENKINS_").map(|key| format!("jenkins.{key}").into()));

        Self::from_figment(&figment)
    }

    /// Extracts the `jenkins` subtree from an already layered tree. Fails
    /// when the key is absent.
    pub fn from_figment(figment: &Figment) -> JenkinsResult<Self> {
        Ok(figment.extract_inner("jenkins")?)
    }

    /// Selects the settings for the named instance, falling back to the
    /// `default` instance when no name is given.
    pub fn instance(&self, name: Option<&str>) -> JenkinsResult<JenkinsInstanceConfig> {
        match name {
            None | Some(DEFAULT_INSTANCE_NAME) => self
                .named_instance(DEFAULT_INSTANCE_NAME)
                .or_else(|| self.flat_instance())
                .ok_or(JenkinsError::NoDefaultInstance),
            Some(named) => self
                .named_instance(named)
                .ok_or_else(|| JenkinsError::NamedInstanceNotFound(named.to_string())),
        }
    }

    fn named_instance(&self, name: &str) -> Option<JenkinsInstanceConfig> {
        self.instances
            .iter()
            .find(|instance| instance.name.as_deref() == Some(name))
            .cloned()
    }

    /// Synthesizes a `default` instance from the flat fields when all three
    /// are set. Empty strings count as unset.
    fn flat_instance(&self) -> Option<JenkinsInstanceConfig> {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        if !present(&self.base_url) || !present(&self.username) || !present(&self.api_key) {
            return None;
        }

        Some(JenkinsInstanceConfig {
            name: Some(DEFAULT_INSTANCE_NAME.to_string()),
            base_url: self.base_url.clone(),
            username: self.username.clone(),
            api_key: self.api_key.clone(),
        })
    }
}

impl JenkinsInstanceConfig {
    /// Name this instance answers to, `default` when unnamed.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_INSTANCE_NAME)
    }

    /// Returns `(base_url, username, api_key)`, failing on the first absent
    /// or empty field.
    pub fn connection(&self) -> JenkinsResult<(String, String, String)> {
        Ok((
            self.require("base_url", self.base_url.as_deref())?,
            self.require("username", self.username.as_deref())?,
            self.require("api_key", self.api_key.as_deref())?,
        ))
    }

    fn require(&self, field: &'static str, value: Option<&str>) -> JenkinsResult<String> {
        match value {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(JenkinsError::ConfigFieldMissing {
                instance: self.label().to_string(),
                field,
            }),
        }
    }
}
