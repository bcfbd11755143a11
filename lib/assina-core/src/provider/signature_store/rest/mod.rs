//! REST transport for the signature store dispatch actions.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use dto::{
    FinishDigitalSignatureRequestDTO, StartDigitalSignatureRequestDTO,
    StartDigitalSignatureResponseDTO, StoreErrorResponse,
};

use crate::provider::signature_store::SignatureStore;
use crate::provider::signature_store::dto::{
    FinishDigitalSignatureRequest, StartDigitalSignatureRequest, StartDigitalSignatureResponse,
};
use crate::provider::signature_store::error::SignatureStoreError;

mod dto;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    pub base_url: Url,
    pub api_key: Option<SecretString>,
}

pub struct RestSignatureStore {
    client: reqwest::Client,
    params: Params,
}

impl RestSignatureStore {
    pub fn new(params: Params) -> Self {
        Self {
            client: reqwest::Client::new(),
            params,
        }
    }

    fn dispatch(&self, path: &str) -> reqwest::RequestBuilder {
        let mut url = self.params.base_url.clone();
        url.set_path(path);

        let request = self.client.post(url);
        match &self.params.api_key {
            Some(api_key) => request.bearer_auth(api_key.expose_secret()),
            None => request,
        }
    }
}

#[async_trait]
impl SignatureStore for RestSignatureStore {
    async fn start_digital_signature(
        &self,
        request: StartDigitalSignatureRequest,
    ) -> Result<StartDigitalSignatureResponse, SignatureStoreError> {
        let body = StartDigitalSignatureRequestDTO {
            certificate_content: &request.certificate_content,
            document_id: &request.document_id,
        };

        let response = self
            .dispatch("digital-signatures/start")
            .json(&body)
            .send()
            .await
            .map_err(|e| SignatureStoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SignatureStoreError::Dispatch(
                rejection_message(response).await,
            ));
        }

        let parsed: StartDigitalSignatureResponseDTO = response
            .json()
            .await
            .map_err(|e| SignatureStoreError::UnexpectedResponse(e.to_string()))?;

        Ok(parsed.into())
    }

    async fn finish_digital_signature(
        &self,
        request: FinishDigitalSignatureRequest,
    ) -> Result<(), SignatureStoreError> {
        let body = FinishDigitalSignatureRequestDTO {
            document_id: &request.document_id,
            sign_hash: &request.sign_hash,
            temporary_subscription_id: &request.temporary_subscription_id,
        };

        let response = self
            .dispatch("digital-signatures/finish")
            .json(&body)
            .send()
            .await
            .map_err(|e| SignatureStoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SignatureStoreError::Dispatch(
                rejection_message(response).await,
            ));
        }

        Ok(())
    }
}

async fn rejection_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<StoreErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => format!("store returned status {status}"),
    }
}
