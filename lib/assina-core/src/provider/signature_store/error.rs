use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignatureStoreError {
    #[error("Store dispatch rejected: `{0}`")]
    Dispatch(String),
    #[error("Store transport error: `{0}`")]
    Transport(String),
    #[error("Unexpected store response: `{0}`")]
    UnexpectedResponse(String),
}
