//! Signature store provider. The store owns document state and sequences
//! signing sessions; providers expose its two dispatch actions as typed calls.

use async_trait::async_trait;

use crate::provider::signature_store::dto::{
    FinishDigitalSignatureRequest, StartDigitalSignatureRequest, StartDigitalSignatureResponse,
};
use crate::provider::signature_store::error::SignatureStoreError;

pub mod dto;
pub mod error;
pub mod rest;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SignatureStore: Send + Sync {
    /// Registers a signing attempt for a document. The store responds with the
    /// prepared hash, the digest algorithm to use and a session identifier.
    async fn start_digital_signature(
        &self,
        request: StartDigitalSignatureRequest,
    ) -> Result<StartDigitalSignatureResponse, SignatureStoreError>;

    /// Completes the session opened by [`Self::start_digital_signature`].
    async fn finish_digital_signature(
        &self,
        request: FinishDigitalSignatureRequest,
    ) -> Result<(), SignatureStoreError>;
}
