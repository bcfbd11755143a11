use shared_types::Thumbprint;
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct CertificateListItemResponseDTO {
    pub thumbprint: Thumbprint,
    pub subject_name: String,
    pub issuer_name: String,
    pub validity_end: OffsetDateTime,
    /// Picker label, already carrying the expiry marker where applicable.
    pub pretty_name: String,
}
