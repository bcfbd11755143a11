//! Core of the document signing flow: certificate discovery through a locally
//! installed PKI agent and signing sessions dispatched to the owning store.

use std::sync::Arc;

use crate::config::core_config::{CoreConfig, PkiAgentType, SignatureStoreType};
use crate::config::{ConfigError, ConfigValidationError};
use crate::provider::pki_agent::local_agent::LocalAgentClient;
use crate::provider::pki_agent::{InstallPrompt, PkiAgent};
use crate::provider::signature_store::SignatureStore;
use crate::provider::signature_store::rest::RestSignatureStore;
use crate::service::signature::SignatureService;

pub mod config;
pub mod provider;
pub mod service;

pub struct AssinaCore {
    pub signature_service: SignatureService,
    pub config: Arc<CoreConfig>,
}

impl AssinaCore {
    /// Wires providers according to the enabled configuration entries. The
    /// install prompt is optional, headless hosts pass `None`.
    pub fn from_config(
        config: CoreConfig,
        install_prompt: Option<Arc<dyn InstallPrompt>>,
    ) -> Result<AssinaCore, ConfigError> {
        let pki_agent = pki_agent_from_config(&config, install_prompt)?;
        let signature_store = signature_store_from_config(&config)?;

        Ok(AssinaCore {
            signature_service: SignatureService::new(pki_agent, signature_store),
            config: Arc::new(config),
        })
    }

    pub fn version() -> Version {
        use shadow_rs::shadow;

        shadow!(build);

        Version {
            target: build::BUILD_RUST_CHANNEL.to_owned(),
            build_time: build::BUILD_TIME_3339.to_owned(),
            branch: build::BRANCH.to_owned(),
            tag: build::TAG.to_owned(),
            commit: build::COMMIT_HASH.to_owned(),
            rust_version: build::RUST_VERSION.to_owned(),
        }
    }
}

fn pki_agent_from_config(
    config: &CoreConfig,
    install_prompt: Option<Arc<dyn InstallPrompt>>,
) -> Result<Arc<dyn PkiAgent>, ConfigError> {
    let (key, fields) = config
        .pki_agent
        .first_enabled()
        .ok_or_else(|| ConfigValidationError::TypeNotFound("pkiAgent".to_string()))?;

    let agent: Arc<dyn PkiAgent> = match fields.r#type() {
        PkiAgentType::LocalAgent => {
            let params = config.pki_agent.get(key)?;
            Arc::new(LocalAgentClient::new(params, install_prompt))
        }
    };

    tracing::debug!("Using PKI agent `{key}`");
    Ok(agent)
}

fn signature_store_from_config(config: &CoreConfig) -> Result<Arc<dyn SignatureStore>, ConfigError> {
    let (key, fields) = config
        .signature_store
        .first_enabled()
        .ok_or_else(|| ConfigValidationError::TypeNotFound("signatureStore".to_string()))?;

    let store: Arc<dyn SignatureStore> = match fields.r#type() {
        SignatureStoreType::Rest => {
            let params = config.signature_store.get(key)?;
            Arc::new(RestSignatureStore::new(params))
        }
    };

    tracing::debug!("Using signature store `{key}`");
    Ok(store)
}

pub struct Version {
    pub target: String,
    pub build_time: String,
    pub branch: String,
    pub tag: String,
    pub commit: String,
    pub rust_version: String,
}
