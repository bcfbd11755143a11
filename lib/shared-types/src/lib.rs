mod document_id;
mod macros;
mod temporary_subscription_id;
mod thumbprint;

pub use document_id::DocumentId;
pub use temporary_subscription_id::TemporarySubscriptionId;
pub use thumbprint::Thumbprint;
