pub mod config;
pub mod errors;
pub mod info_provider;

pub use crate::config::{DEFAULT_INSTANCE_NAME, JenkinsConfig, JenkinsInstanceConfig};
pub use crate::errors::{JenkinsError, JenkinsResult};
pub use crate::info_provider::{
    DefaultJenkinsInfoProvider, DummyJenkinsInfoProvider, JENKINS_ANNOTATION,
    JENKINS_LEGACY_ANNOTATION, JenkinsInfo, JenkinsInfoProvider, is_jenkins_available,
};
