use crate::types::{AttachedSpecification, EvaluationReport, Feature};

/// Fail-closed AND over every attached specification.
pub(crate) fn all_enabled(specifications: &[AttachedSpecification]) -> bool {
    !specifications.is_empty() && specifications.iter().all(|a| a.spec.evaluate())
}

/// Like [`all_enabled`] but records every vote instead of short-circuiting.
pub(crate) fn evaluate_detailed(flag: &str, feature: Option<&Feature>) -> EvaluationReport {
    let Some(feature) = feature else {
        return EvaluationReport::new(flag.to_owned(), false, Vec::new(), false);
    };

    let votes: Vec<(String, bool)> = feature
        .attached()
        .iter()
        .map(|a| (a.name.clone(), a.spec.evaluate()))
        .collect();
    let enabled = !votes.is_empty() && votes.iter().all(|(_, vote)| *vote);

    EvaluationReport::new(feature.name().to_owned(), true, votes, enabled)
}
