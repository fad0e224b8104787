use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use ventalms::directory::{seed, CompanyDirectory};
use ventalms::error::AppError;
use ventalms::program::ScoringCriterion;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the session directory, seeded with the demo records the console
/// expects until a real backend exists.
pub(crate) fn seeded_directory(latency: Duration) -> Arc<CompanyDirectory> {
    Arc::new(CompanyDirectory::with_companies(
        latency,
        seed::demo_companies(),
    ))
}

/// Load a scoring configuration from a JSON file for CLI validation.
pub(crate) fn read_criteria_file(path: &Path) -> Result<Vec<ScoringCriterion>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let criteria = serde_json::from_str(&raw)?;
    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_directory_exposes_demo_records() {
        let directory = seeded_directory(Duration::ZERO);
        let companies = directory.list().await;
        assert_eq!(companies.len(), 5);
        assert_eq!(companies[0].id, 1);
    }
}
