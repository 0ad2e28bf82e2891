//! Closed level and status tags.
//!
//! Severities and activity-event statuses are fixed enum variants rather
//! than open strings, so dispatch over them is checked exhaustively.

use std::fmt;

/// Severity levels understood by the facades.
///
/// `Apm` and `Mdal` sit numerically between INFO and WARNING and act purely
/// as routing/filtering discriminators for the backend configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Apm,
    Mdal,
    Warning,
    Error,
}

impl Level {
    /// Numeric value, for backends that filter numerically.
    pub fn value(self) -> u8 {
        match self {
            Level::Info => 20,
            Level::Apm => 21,
            Level::Mdal => 22,
            Level::Warning => 30,
            Level::Error => 40,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Apm => "APM",
            Level::Mdal => "MDAL",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-call sensitivity tag, carried as an extra field on leveled records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityLevel {
    #[default]
    Level1,
    Level2,
    Level3,
}

impl SecurityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SecurityLevel::Level1 => "LEVEL1",
            SecurityLevel::Level2 => "LEVEL2",
            SecurityLevel::Level3 => "LEVEL3",
        }
    }
}

/// Lifecycle status of an activity event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityEventStatus {
    Start,
    End,
    InProgress,
    Success,
    Failed,
}

impl ActivityEventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityEventStatus::Start => "START",
            ActivityEventStatus::End => "END",
            ActivityEventStatus::InProgress => "INPROGRESS",
            ActivityEventStatus::Success => "SUCCESS",
            ActivityEventStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for ActivityEventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_levels_sit_between_info_and_warning() {
        assert!(Level::Info.value() < Level::Apm.value());
        assert!(Level::Apm.value() < Level::Mdal.value());
        assert!(Level::Mdal.value() < Level::Warning.value());
        assert!(Level::Warning.value() < Level::Error.value());
    }

    #[test]
    fn test_level_names() {
        assert_eq!(Level::Apm.to_string(), "APM");
        assert_eq!(Level::Mdal.to_string(), "MDAL");
    }

    #[test]
    fn test_default_security_level() {
        assert_eq!(SecurityLevel::default().as_str(), "LEVEL1");
    }

    #[test]
    fn test_activity_status_rendering() {
        assert_eq!(ActivityEventStatus::InProgress.as_str(), "INPROGRESS");
        assert_eq!(ActivityEventStatus::Failed.to_string(), "FAILED");
    }
}
