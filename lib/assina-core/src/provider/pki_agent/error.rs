//! Enumerates errors reported by PKI agent providers.

use shared_types::Thumbprint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PkiAgentError {
    #[error("PKI agent initialization failed: `{0}`")]
    InitializationFailed(String),
    #[error("Certificate `{0}` not found in agent store")]
    CertificateNotFound(Thumbprint),
    #[error("PKI agent operation failed: `{0}`")]
    Failed(String),
    #[error("PKI agent transport error: `{0}`")]
    Transport(String),
}
