use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("feature '{0}' not available yet (toggle off or not built)")]
    FeatureUnavailable(String),

    #[error("history feature not enabled yet")]
    HistoryDisabled,

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("invalid operand '{value}'")]
    InvalidOperand {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
