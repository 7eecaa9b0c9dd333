use thiserror::Error;

/// Name used by the generic reductions in `aggregate`
pub(crate) const GENERIC_INPUT: &str = "elements";

#[derive(Error, Debug)]
pub enum RosterError {
    /// A terminal reduction was applied to zero elements.
    #[error("Empty sequence: no {0} to reduce")]
    EmptySequence(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Whether this error is the "no data" signal rather than a real failure
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, RosterError::EmptySequence(_))
    }

    /// Name the input of a generic reduction that came up empty.
    ///
    /// Errors from nested inputs (a job history, say) keep their own name.
    pub fn for_input(self, what: &'static str) -> Self {
        match self {
            RosterError::EmptySequence(GENERIC_INPUT) => RosterError::EmptySequence(what),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
