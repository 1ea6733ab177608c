//! Shared error types and utilities for the mergington project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// How a roster failure is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The activity does not exist.
    NotFound,
    /// The request contradicts the current roster.
    Conflict,
}

/// Failures of the roster operations. The display text is the detail shown
/// to the student.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("Activity is full")]
    ActivityFull,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::ActivityNotFound => ErrorKind::NotFound,
            RosterError::AlreadySignedUp | RosterError::NotSignedUp | RosterError::ActivityFull => {
                ErrorKind::Conflict
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_error_kinds() {
        assert_eq!(RosterError::ActivityNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(RosterError::AlreadySignedUp.kind(), ErrorKind::Conflict);
        assert_eq!(RosterError::NotSignedUp.kind(), ErrorKind::Conflict);
        assert_eq!(RosterError::ActivityFull.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn roster_error_details() {
        assert!(RosterError::AlreadySignedUp.to_string().contains("already signed up"));
        assert!(RosterError::NotSignedUp.to_string().contains("not signed up"));
        assert_eq!(RosterError::ActivityNotFound.to_string(), "Activity not found");
    }
}
