use one_dto_mapper::Into;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use shared_types::Thumbprint;
use time::OffsetDateTime;

use crate::provider::pki_agent::model::Certificate;

#[derive(Serialize)]
pub(super) struct AgentInitRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<&'a str>,
}

#[derive(Deserialize)]
pub(super) struct AgentInitResponse {
    pub ready: bool,
}

#[serde_as]
#[derive(Debug, Deserialize, Into)]
#[into(Certificate)]
#[serde(rename_all = "camelCase")]
pub(super) struct AgentCertificate {
    pub thumbprint: Thumbprint,
    pub subject_name: String,
    pub issuer_name: String,
    #[serde_as(as = "time::format_description::well_known::Rfc3339")]
    pub validity_end: OffsetDateTime,
}

#[derive(Deserialize)]
pub(super) struct AgentCertificateContent {
    pub content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AgentSignHashRequest<'a> {
    pub thumbprint: &'a Thumbprint,
    pub hash: &'a str,
    pub digest_algorithm: &'a str,
}

#[derive(Deserialize)]
pub(super) struct AgentSignHashResponse {
    pub signature: String,
}

#[derive(Deserialize)]
pub(super) struct AgentErrorResponse {
    pub message: String,
}
