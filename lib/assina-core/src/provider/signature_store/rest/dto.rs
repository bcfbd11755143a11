use one_dto_mapper::Into;
use serde::{Deserialize, Serialize};
use shared_types::{DocumentId, TemporarySubscriptionId};

use crate::provider::signature_store::dto::StartDigitalSignatureResponse;

#[derive(Serialize)]
pub(super) struct StartDigitalSignatureRequestDTO<'a> {
    #[serde(rename = "certificadoConteudo")]
    pub certificate_content: &'a str,
    #[serde(rename = "documentId")]
    pub document_id: &'a DocumentId,
}

#[derive(Deserialize, Into)]
#[into(StartDigitalSignatureResponse)]
pub(super) struct StartDigitalSignatureResponseDTO {
    #[serde(rename = "hashParaAssinar")]
    pub hash: String,
    #[serde(rename = "algoritmoHash")]
    pub hash_algorithm: String,
    #[serde(rename = "assinaturaTemporariaId")]
    pub temporary_subscription_id: TemporarySubscriptionId,
}

// The legacy endpoint names the session field differently on finish than on
// start. Renames follow the endpoint, the model keeps one name.
#[derive(Serialize)]
pub(super) struct FinishDigitalSignatureRequestDTO<'a> {
    #[serde(rename = "documentId")]
    pub document_id: &'a DocumentId,
    #[serde(rename = "signHash")]
    pub sign_hash: &'a str,
    #[serde(rename = "temporarySubscription")]
    pub temporary_subscription_id: &'a TemporarySubscriptionId,
}

#[derive(Deserialize)]
pub(super) struct StoreErrorResponse {
    pub message: String,
}
