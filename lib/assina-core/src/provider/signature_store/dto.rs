use shared_types::{DocumentId, TemporarySubscriptionId};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StartDigitalSignatureRequest {
    pub certificate_content: String,
    pub document_id: DocumentId,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StartDigitalSignatureResponse {
    pub hash: String,
    pub hash_algorithm: String,
    pub temporary_subscription_id: TemporarySubscriptionId,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FinishDigitalSignatureRequest {
    pub document_id: DocumentId,
    pub sign_hash: String,
    pub temporary_subscription_id: TemporarySubscriptionId,
}
