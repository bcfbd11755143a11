use thiserror::Error;

use crate::provider::pki_agent::error::PkiAgentError;
use crate::provider::signature_store::error::SignatureStoreError;

/// Collaborator failures surface through service calls unchanged, so callers
/// see the provider's own message.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    PkiAgent(#[from] PkiAgentError),
    #[error(transparent)]
    SignatureStore(#[from] SignatureStoreError),
}
