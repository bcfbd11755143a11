use shared_types::{DocumentId, Thumbprint};
use time::OffsetDateTime;

use super::SignatureService;
use super::dto::CertificateListItemResponseDTO;
use super::mapper::create_list_item_dto;
use crate::provider::pki_agent::model::{AgentStatus, SignHashRequest};
use crate::provider::signature_store::dto::{
    FinishDigitalSignatureRequest, StartDigitalSignatureRequest,
};
use crate::service::error::ServiceError;

impl SignatureService {
    /// Initializes the PKI agent. Returns `false` when the agent is not
    /// installed on the machine, in which case the caller should offer
    /// [`SignatureService::redirect_to_install_page`].
    pub async fn load_agent(&self) -> Result<bool, ServiceError> {
        match self.pki_agent.init().await? {
            AgentStatus::Ready => Ok(true),
            AgentStatus::NotInstalled => {
                tracing::info!("PKI agent not installed");
                Ok(false)
            }
        }
    }

    /// Certificates available for signing, each decorated with its picker label.
    pub async fn list_certificates(
        &self,
    ) -> Result<Vec<CertificateListItemResponseDTO>, ServiceError> {
        let certificates = self.pki_agent.list_certificates().await?;

        let now = OffsetDateTime::now_utc();
        Ok(certificates
            .into_iter()
            .map(|certificate| create_list_item_dto(certificate, now))
            .collect())
    }

    /// Signs one document with the certificate behind `thumbprint`.
    ///
    /// Strictly linear: read the certificate, start the session at the store,
    /// sign the prepared hash through the agent, finish the session. The first
    /// failing step aborts the whole attempt, nothing is retried or undone.
    pub async fn sign(
        &self,
        thumbprint: &Thumbprint,
        document_id: &DocumentId,
    ) -> Result<(), ServiceError> {
        let certificate_content = self.pki_agent.read_certificate(thumbprint).await?;

        let session = self
            .signature_store
            .start_digital_signature(StartDigitalSignatureRequest {
                certificate_content,
                document_id: document_id.to_owned(),
            })
            .await?;

        let sign_hash = self
            .pki_agent
            .sign_hash(SignHashRequest {
                thumbprint: thumbprint.to_owned(),
                hash: session.hash,
                digest_algorithm: session.hash_algorithm,
            })
            .await?;

        self.signature_store
            .finish_digital_signature(FinishDigitalSignatureRequest {
                document_id: document_id.to_owned(),
                sign_hash,
                temporary_subscription_id: session.temporary_subscription_id,
            })
            .await?;

        tracing::info!("Document {document_id} signed with certificate {thumbprint}");
        Ok(())
    }

    pub fn redirect_to_install_page(&self) {
        self.pki_agent.redirect_to_install_page();
    }
}
