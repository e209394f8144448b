use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImpactError {
    #[error("missing capability: {0}")]
    CapabilityMissing(String),

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("registration conflict: {0}")]
    RegistrationConflict(String),

    #[error("rule '{rule}' failed: {source}")]
    RuleExecution {
        rule: String,
        #[source]
        source: Box<ImpactError>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ImpactError>;
