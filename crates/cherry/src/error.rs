/// Errors reported while setting Cherry up.
///
/// Per-tap conditions (taps outside every menu, containers without links)
/// are normal control flow and never show up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CherryError {
    /// Trigger and panel collections have different lengths.
    ConfigurationMismatch { triggers: usize, panels: usize },
    /// Configuration JSON could not be parsed.
    InvalidConfig(String),
    /// A required host object (window, document, history) is missing.
    HostUnavailable(&'static str),
    /// An event listener could not be registered.
    Listener(String),
}

impl std::fmt::Display for CherryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CherryError::ConfigurationMismatch { triggers, panels } => write!(
                f,
                "menu trigger count ({triggers}) does not match menu panel count ({panels})"
            ),
            CherryError::InvalidConfig(message) => write!(f, "invalid configuration: {message}"),
            CherryError::HostUnavailable(what) => write!(f, "{what} is not available"),
            CherryError::Listener(message) => write!(f, "failed to register listener: {message}"),
        }
    }
}

impl std::error::Error for CherryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_counts() {
        let error = CherryError::ConfigurationMismatch { triggers: 3, panels: 2 };
        assert_eq!(
            error.to_string(),
            "menu trigger count (3) does not match menu panel count (2)"
        );
    }

    #[test]
    fn test_host_unavailable_message() {
        assert_eq!(
            CherryError::HostUnavailable("document").to_string(),
            "document is not available"
        );
    }
}
