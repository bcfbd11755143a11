use thiserror::Error;

pub mod core_config;

#[cfg(test)]
mod test;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parsing error: `{0}`")]
    Parsing(#[from] ConfigParsingError),
    #[error("Config validation error: `{0}`")]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("General parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Configuration entry `{0}` not found")]
    EntryNotFound(String),
    #[error("Fields deserialization failed for `{key}`")]
    FieldsDeserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("No enabled configuration entry in block `{0}`")]
    TypeNotFound(String),
}
