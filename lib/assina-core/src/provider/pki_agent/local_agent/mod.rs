//! Client for the local signing agent, a user-installed background service
//! exposing the machine's certificate store over loopback HTTP.

use std::sync::Arc;

use async_trait::async_trait;
use one_dto_mapper::convert_inner;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use shared_types::Thumbprint;
use url::Url;

use dto::{
    AgentCertificate, AgentCertificateContent, AgentErrorResponse, AgentInitRequest,
    AgentInitResponse, AgentSignHashRequest, AgentSignHashResponse,
};

use crate::provider::pki_agent::error::PkiAgentError;
use crate::provider::pki_agent::model::{AgentStatus, Certificate, SignHashRequest};
use crate::provider::pki_agent::{InstallPrompt, PkiAgent};

mod dto;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    pub base_url: Url,
    pub install_page_url: Url,
    pub license: Option<SecretString>,
}

pub struct LocalAgentClient {
    client: reqwest::Client,
    install_prompt: Option<Arc<dyn InstallPrompt>>,
    params: Params,
}

impl LocalAgentClient {
    pub fn new(params: Params, install_prompt: Option<Arc<dyn InstallPrompt>>) -> Self {
        Self {
            client: reqwest::Client::new(),
            install_prompt,
            params,
        }
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.params.base_url.clone();
        url.set_path(path);
        url
    }
}

#[async_trait]
impl PkiAgent for LocalAgentClient {
    async fn init(&self) -> Result<AgentStatus, PkiAgentError> {
        let request = AgentInitRequest {
            license: self
                .params
                .license
                .as_ref()
                .map(|license| license.expose_secret()),
        };

        let result = self
            .client
            .post(self.endpoint("initialize"))
            .json(&request)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            // nothing listening on the agent port means the agent is not installed
            Err(error) if error.is_connect() => return Ok(AgentStatus::NotInstalled),
            Err(error) => return Err(PkiAgentError::InitializationFailed(error.to_string())),
        };

        if !response.status().is_success() {
            return Err(PkiAgentError::InitializationFailed(
                error_message(response).await,
            ));
        }

        let parsed: AgentInitResponse = response
            .json()
            .await
            .map_err(|e| PkiAgentError::InitializationFailed(e.to_string()))?;

        if parsed.ready {
            Ok(AgentStatus::Ready)
        } else {
            Err(PkiAgentError::InitializationFailed(
                "agent reported not ready".to_string(),
            ))
        }
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, PkiAgentError> {
        let response = self
            .client
            .get(self.endpoint("certificates"))
            .send()
            .await
            .map_err(|e| PkiAgentError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PkiAgentError::Failed(error_message(response).await));
        }

        let certificates: Vec<AgentCertificate> = response
            .json()
            .await
            .map_err(|e| PkiAgentError::Failed(e.to_string()))?;

        Ok(convert_inner(certificates))
    }

    async fn read_certificate(&self, thumbprint: &Thumbprint) -> Result<String, PkiAgentError> {
        let response = self
            .client
            .get(self.endpoint(&format!("certificates/{thumbprint}")))
            .send()
            .await
            .map_err(|e| PkiAgentError::Transport(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(PkiAgentError::CertificateNotFound(thumbprint.to_owned()));
        }

        if !response.status().is_success() {
            return Err(PkiAgentError::Failed(error_message(response).await));
        }

        let parsed: AgentCertificateContent = response
            .json()
            .await
            .map_err(|e| PkiAgentError::Failed(e.to_string()))?;

        Ok(parsed.content)
    }

    async fn sign_hash(&self, request: SignHashRequest) -> Result<String, PkiAgentError> {
        let body = AgentSignHashRequest {
            thumbprint: &request.thumbprint,
            hash: &request.hash,
            digest_algorithm: &request.digest_algorithm,
        };

        let response = self
            .client
            .post(self.endpoint("sign-hash"))
            .json(&body)
            .send()
            .await
            .map_err(|e| PkiAgentError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PkiAgentError::Failed(error_message(response).await));
        }

        let parsed: AgentSignHashResponse = response
            .json()
            .await
            .map_err(|e| PkiAgentError::Failed(e.to_string()))?;

        Ok(parsed.signature)
    }

    fn redirect_to_install_page(&self) {
        match &self.install_prompt {
            Some(prompt) => prompt.open_install_page(&self.params.install_page_url),
            None => tracing::info!(
                "No install prompt registered, agent installer available at {}",
                self.params.install_page_url
            ),
        }
    }
}

async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<AgentErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => format!("agent returned status {status}"),
    }
}
