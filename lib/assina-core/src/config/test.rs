use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use super::core_config::*;
use super::{ConfigError, ConfigValidationError};
use crate::AssinaCore;
use crate::provider::pki_agent::local_agent;
use crate::provider::signature_store::rest;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SystemConfig {
    pub environment: String,
    pub locale: Option<String>,
}

#[cfg(feature = "config_yaml")]
fn generic_config_yaml() -> &'static str {
    indoc::indoc! {"
        app:
            environment: 'dev'
        pkiAgent:
            LACUNA:
                type: 'LOCAL_AGENT'
                display: 'pkiAgent.lacuna'
                order: 0
                params:
                    public:
                        baseUrl: 'http://127.0.0.1:53952'
                        installPageUrl: 'https://signer.example.com/install'
                    private:
                        license: 'test-license'
        signatureStore:
            REST:
                type: 'REST'
                display: 'signatureStore.rest'
                order: 0
                params:
                    public:
                        baseUrl: 'https://backend.example.com'
    "}
}

#[test]
#[cfg(feature = "config_yaml")]
fn test_parse_config() {
    let overrides = indoc::indoc! {"
        app:
            locale: 'pt-BR'
        pkiAgent:
            LACUNA:
                params:
                    public:
                        baseUrl: 'http://127.0.0.1:60000'
    "};

    let config =
        AppConfig::<SystemConfig>::from_yaml([generic_config_yaml(), overrides]).unwrap();

    assert_eq!(config.app.environment, "dev");
    assert_eq!(config.app.locale, Some("pt-BR".into()));

    let agent_params: local_agent::Params = config.core.pki_agent.get("LACUNA").unwrap();
    assert_eq!("http://127.0.0.1:60000/", agent_params.base_url.as_str()); // via overrides
    assert_eq!(
        "https://signer.example.com/install",
        agent_params.install_page_url.as_str()
    );
    assert_eq!(
        "test-license",
        agent_params.license.unwrap().expose_secret() // via private params
    );

    let store_params: rest::Params = config.core.signature_store.get("REST").unwrap();
    assert_eq!("https://backend.example.com/", store_params.base_url.as_str());
    assert!(store_params.api_key.is_none());
}

#[test]
#[cfg(feature = "config_yaml")]
fn test_first_enabled_prefers_lowest_order() {
    let config = indoc::indoc! {"
        pkiAgent:
            FALLBACK:
                type: 'LOCAL_AGENT'
                display: 'pkiAgent.fallback'
                order: 10
            LACUNA:
                type: 'LOCAL_AGENT'
                display: 'pkiAgent.lacuna'
                order: 0
        signatureStore: {}
    "};

    let config = AppConfig::<NoCustomConfig>::from_yaml([config]).unwrap();

    let (key, _) = config.core.pki_agent.first_enabled().unwrap();
    assert_eq!("LACUNA", key);
}

#[test]
#[cfg(feature = "config_yaml")]
fn test_first_enabled_skips_disabled_entries() {
    let config = indoc::indoc! {"
        pkiAgent:
            FALLBACK:
                type: 'LOCAL_AGENT'
                display: 'pkiAgent.fallback'
                order: 10
            LACUNA:
                type: 'LOCAL_AGENT'
                display: 'pkiAgent.lacuna'
                order: 0
                enabled: false
        signatureStore: {}
    "};

    let config = AppConfig::<NoCustomConfig>::from_yaml([config]).unwrap();

    let (key, _) = config.core.pki_agent.first_enabled().unwrap();
    assert_eq!("FALLBACK", key);
}

#[test]
#[cfg(feature = "config_yaml")]
fn test_parse_config_missing_field() {
    // given
    let config = indoc::indoc! {"
        pkiAgent:
            LACUNA:
                type: 'LOCAL_AGENT'
                order: 0
        signatureStore: {}
    "};

    // when
    let result = AppConfig::<NoCustomConfig>::from_yaml([config]);

    // then
    assert!(matches!(
        result,
        Err(super::ConfigParsingError::GeneralParsingError(message))
            if message.contains("missing field `display`")
    ));
}

#[test]
#[cfg(feature = "config_yaml")]
fn test_core_assembly_from_config() {
    let config = AppConfig::<SystemConfig>::from_yaml([generic_config_yaml()]).unwrap();

    assert!(AssinaCore::from_config(config.core, None).is_ok());
}

#[test]
#[cfg(feature = "config_yaml")]
fn test_core_assembly_fails_without_enabled_agent() {
    let config = indoc::indoc! {"
        pkiAgent:
            LACUNA:
                type: 'LOCAL_AGENT'
                display: 'pkiAgent.lacuna'
                order: 0
                enabled: false
        signatureStore:
            REST:
                type: 'REST'
                display: 'signatureStore.rest'
                order: 0
                params:
                    public:
                        baseUrl: 'https://backend.example.com'
    "};

    let config = AppConfig::<NoCustomConfig>::from_yaml([config]).unwrap();

    let result = AssinaCore::from_config(config.core, None);
    assert!(matches!(
        result,
        Err(ConfigError::Validation(ConfigValidationError::TypeNotFound(block)))
            if block == "pkiAgent"
    ));
}
