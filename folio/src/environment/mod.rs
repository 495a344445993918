use std::sync::Arc;

use folio_api_rest::{RateLimitConfig, RealIpConfig, RestServerConfig};
use folio_config::Config;
use folio_core_contact_impl::ContactFeatureConfig;
use folio_core_health_impl::HealthFeatureConfig;
use folio_persistence_file::FileSubmissionRepository;
use types::{ContactFeature, Email, HealthFeature, RestServer, SubmissionRepo, Template};

pub mod types;

/// Builds the services of the application from their dependencies.
#[derive(Debug, Clone)]
pub struct Provider {
    config: ConfigProvider,
    email: Email,
    template: Template,
    submission_repo: SubmissionRepo,
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> anyhow::Result<Self> {
        let submission_repo = match &config.submission_log_directory {
            Some(directory) => FileSubmissionRepository::new(directory),
            None => FileSubmissionRepository::disabled(),
        };

        Ok(Self {
            email,
            template: Template::new()?,
            submission_repo,
            config,
        })
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer::new(
            self.health_feature(),
            self.contact_feature(),
            self.config.rest_server_config.clone(),
        )
    }

    pub fn health_feature(&self) -> HealthFeature {
        HealthFeature::new(
            Default::default(),
            self.email.clone(),
            self.config.health_feature_config,
        )
    }

    pub fn contact_feature(&self) -> ContactFeature {
        ContactFeature::new(
            Default::default(),
            Default::default(),
            self.email.clone(),
            self.template.clone(),
            self.submission_repo.clone(),
            self.config.contact_feature_config.clone(),
        )
    }

    pub fn submission_repo(&self) -> &SubmissionRepo {
        &self.submission_repo
    }
}

/// Service configuration derived from [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    rest_server_config: RestServerConfig,
    contact_feature_config: ContactFeatureConfig,
    health_feature_config: HealthFeatureConfig,
    submission_log_directory: Option<std::path::PathBuf>,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            address: config.http.address,
            allowed_origins: config.http.allowed_origins.clone(),
            body_limit: config.http.body_limit,
            environment: config.environment,
            real_ip: config.http.real_ip.as_ref().map(|real_ip| {
                Arc::new(RealIpConfig {
                    header: real_ip.header.clone(),
                    set_from: real_ip.set_from,
                })
            }),
            rate_limit: config.http.rate_limit.as_ref().map(|rate_limit| RateLimitConfig {
                max_requests: rate_limit.max_requests,
                window: rate_limit.window.into(),
            }),
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config.contact.recipient.clone().into(),
            site_label: config.contact.site_label.as_str().into(),
        };

        let health_feature_config = HealthFeatureConfig {
            environment: config.environment,
        };

        // Persistence
        let submission_log_directory = config
            .submission_log
            .as_ref()
            .map(|submission_log| submission_log.directory.clone());

        Ok(Self {
            rest_server_config,
            contact_feature_config,
            health_feature_config,
            submission_log_directory,
        })
    }
}
