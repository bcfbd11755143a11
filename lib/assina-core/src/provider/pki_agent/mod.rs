//! PKI agent provider, the bridge to the locally installed signing component
//! holding the user's certificates and private keys.

use async_trait::async_trait;
use shared_types::Thumbprint;
use url::Url;

use crate::provider::pki_agent::error::PkiAgentError;
use crate::provider::pki_agent::model::{AgentStatus, Certificate, SignHashRequest};

pub mod error;
pub mod local_agent;
pub mod model;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait PkiAgent: Send + Sync {
    /// Handshake with the agent. Distinguishes a missing agent from a broken one:
    /// the former reports [`AgentStatus::NotInstalled`], the latter fails.
    async fn init(&self) -> Result<AgentStatus, PkiAgentError>;

    async fn list_certificates(&self) -> Result<Vec<Certificate>, PkiAgentError>;

    /// Reads the full encoded content of one certificate from the agent store.
    async fn read_certificate(&self, thumbprint: &Thumbprint) -> Result<String, PkiAgentError>;

    /// Produces a signature over an externally computed hash. The hash and the
    /// digest algorithm are handed to the agent exactly as received.
    async fn sign_hash(&self, request: SignHashRequest) -> Result<String, PkiAgentError>;

    fn redirect_to_install_page(&self);
}

/// Host hook for sending the user to the agent installer. Native shells open a
/// browser, embedded hosts render their own prompt.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait InstallPrompt: Send + Sync {
    fn open_install_page(&self, url: &Url);
}
