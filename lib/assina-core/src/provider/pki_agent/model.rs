use shared_types::Thumbprint;
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AgentStatus {
    Ready,
    NotInstalled,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certificate {
    pub thumbprint: Thumbprint,
    pub subject_name: String,
    pub issuer_name: String,
    pub validity_end: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignHashRequest {
    pub thumbprint: Thumbprint,
    pub hash: String,
    pub digest_algorithm: String,
}
