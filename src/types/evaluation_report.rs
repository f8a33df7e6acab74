use std::fmt;

/// Detailed evaluation report returned by
/// [`ToggleChecker::evaluate_detailed()`](super::ToggleChecker::evaluate_detailed).
///
/// Records whether the flag exists, how each attached specification voted
/// (in declaration order), and the final state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct EvaluationReport {
    flag: String,
    found: bool,
    votes: Vec<(String, bool)>,
    enabled: bool,
}

impl EvaluationReport {
    pub(crate) fn new(
        flag: String,
        found: bool,
        votes: Vec<(String, bool)>,
        enabled: bool,
    ) -> Self {
        Self {
            flag,
            found,
            votes,
            enabled,
        }
    }

    /// The flag name, as declared when found, otherwise as queried.
    #[must_use]
    pub fn flag(&self) -> &str {
        &self.flag
    }

    #[must_use]
    pub fn found(&self) -> bool {
        self.found
    }

    /// Specification name and result, one entry per attached specification.
    #[must_use]
    pub fn votes(&self) -> &[(String, bool)] {
        &self.votes
    }

    /// Same as [`ToggleChecker::is_enabled()`](super::ToggleChecker::is_enabled).
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.found {
            return write!(f, "{} = false (unknown flag)", self.flag);
        }
        if self.votes.is_empty() {
            return write!(f, "{} = false (no specifications)", self.flag);
        }
        let votes: Vec<String> = self
            .votes
            .iter()
            .map(|(name, vote)| format!("{name}: {vote}"))
            .collect();
        write!(f, "{} = {} [{}]", self.flag, self.enabled, votes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown() {
        let report = EvaluationReport::new("x".into(), false, Vec::new(), false);
        assert_eq!(report.to_string(), "x = false (unknown flag)");
    }

    #[test]
    fn display_empty() {
        let report = EvaluationReport::new("x".into(), true, Vec::new(), false);
        assert_eq!(report.to_string(), "x = false (no specifications)");
    }

    #[test]
    fn display_votes() {
        let report = EvaluationReport::new(
            "x".into(),
            true,
            vec![("true".into(), true), ("range".into(), false)],
            false,
        );
        assert_eq!(report.to_string(), "x = false [true: true, range: false]");
    }
}
