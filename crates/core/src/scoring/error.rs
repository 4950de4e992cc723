use std::fmt;

/// A non-empty record reached the scorer without a usable ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingIdentifierError {
    /// Zero-based position of the offending record in the input batch.
    pub position: usize,
    pub name: Option<String>,
}

impl fmt::Display for MissingIdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(
                f,
                "metrics record at position {} (name={name}) is missing a ticker",
                self.position
            ),
            None => write!(
                f,
                "metrics record at position {} is missing a ticker",
                self.position
            ),
        }
    }
}

impl std::error::Error for MissingIdentifierError {}
