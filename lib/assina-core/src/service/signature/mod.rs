use std::sync::Arc;

use crate::provider::pki_agent::PkiAgent;
use crate::provider::signature_store::SignatureStore;

pub mod dto;
pub mod service;

pub(crate) mod mapper;

/// Sequences the PKI agent and the signature store into the signing flow.
///
/// Callers are expected to go through [`SignatureService::load_agent`] before
/// listing or signing, and through [`SignatureService::list_certificates`] to
/// obtain a thumbprint for [`SignatureService::sign`]. The order is a calling
/// convention, not enforced at runtime.
#[derive(Clone)]
pub struct SignatureService {
    pki_agent: Arc<dyn PkiAgent>,
    signature_store: Arc<dyn SignatureStore>,
}

impl SignatureService {
    pub fn new(pki_agent: Arc<dyn PkiAgent>, signature_store: Arc<dyn SignatureStore>) -> Self {
        Self {
            pki_agent,
            signature_store,
        }
    }
}
