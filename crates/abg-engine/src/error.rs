use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("insufficient data: missing required field '{0}'")]
    MissingField(&'static str),
}
