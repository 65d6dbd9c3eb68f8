use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

use super::error::CollectorError;
use super::reaction_event::CollectedReaction;

/// Termination triggers for a collector
///
/// Both are optional. A collector with neither only ends on an explicit stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectOptions {
    /// Stop with [`StopReason::Time`] after this duration
    pub time: Option<Duration>,
    /// Stop with [`StopReason::MaxMatches`] once this many reactions were accepted
    pub max_matches: Option<usize>,
}

impl CollectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(mut self, time: Duration) -> Self {
        self.time = Some(time);
        self
    }

    pub fn max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = Some(max_matches);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), CollectorError> {
        if self.max_matches == Some(0) {
            return Err(CollectorError::InvalidOptions {
                reason: "max_matches must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Why a collector ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The configured `time` elapsed
    Time,
    /// The configured `max_matches` was reached
    MaxMatches,
    /// Stopped explicitly by the caller
    Manual(String),
}

impl StopReason {
    pub fn as_str(&self) -> &str {
        match self {
            StopReason::Time => "time",
            StopReason::MaxMatches => "maxMatches",
            StopReason::Manual(reason) => reason,
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StopReason {
    fn from(reason: &str) -> Self {
        StopReason::Manual(reason.to_string())
    }
}

impl From<String> for StopReason {
    fn from(reason: String) -> Self {
        StopReason::Manual(reason)
    }
}

impl Serialize for StopReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Final outcome delivered to `end` observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionEnd {
    pub collected: Vec<CollectedReaction>,
    pub reason: StopReason,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StopReason::Time, "time")]
    #[case(StopReason::MaxMatches, "maxMatches")]
    #[case(StopReason::Manual("user".to_string()), "user")]
    fn test_stop_reason_display(#[case] reason: StopReason, #[case] expected: &str) {
        assert_eq!(reason.to_string(), expected);
        assert_eq!(serde_json::to_value(&reason).unwrap(), expected);
    }

    #[test]
    fn test_options_builder() {
        let options = CollectOptions::new()
            .time(Duration::from_secs(30))
            .max_matches(3);

        assert_eq!(options.time, Some(Duration::from_secs(30)));
        assert_eq!(options.max_matches, Some(3));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_options_reject_zero_max_matches() {
        let options = CollectOptions::new().max_matches(0);

        assert!(matches!(
            options.validate(),
            Err(CollectorError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn test_default_options_have_no_triggers() {
        let options = CollectOptions::default();

        assert!(options.time.is_none());
        assert!(options.max_matches.is_none());
        assert!(options.validate().is_ok());
    }
}
