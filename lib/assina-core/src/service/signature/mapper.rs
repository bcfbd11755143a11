use time::OffsetDateTime;

use super::dto::CertificateListItemResponseDTO;
use crate::provider::pki_agent::model::Certificate;

// Label wording is shared with the certificate pickers, do not rephrase.
pub(super) fn create_list_item_dto(
    certificate: Certificate,
    now: OffsetDateTime,
) -> CertificateListItemResponseDTO {
    let pretty_name = if certificate.validity_end < now {
        format!(
            "[EXPIRADO] {} (emitido por {})",
            certificate.subject_name, certificate.issuer_name
        )
    } else {
        format!(
            "{} (emitido por {})",
            certificate.subject_name, certificate.issuer_name
        )
    };

    CertificateListItemResponseDTO {
        thumbprint: certificate.thumbprint,
        subject_name: certificate.subject_name,
        issuer_name: certificate.issuer_name,
        validity_end: certificate.validity_end,
        pretty_name,
    }
}
