use std::sync::Mutex;
use std::time::Duration;

use super::domain::{Company, CompanyUpdate, NewCompany, ValidationError};

/// In-memory company store with simulated request latency.
///
/// Constructed once at startup and shared behind an `Arc`; the `Mutex` keeps
/// overlapping callers serialized, which is the only ordering the mock
/// backend promises.
pub struct CompanyDirectory {
    companies: Mutex<Vec<Company>>,
    latency: Duration,
}

impl CompanyDirectory {
    pub fn new(latency: Duration) -> Self {
        Self::with_companies(latency, Vec::new())
    }

    pub fn with_companies(latency: Duration, companies: Vec<Company>) -> Self {
        Self {
            companies: Mutex::new(companies),
            latency,
        }
    }

    /// Snapshot of every record in insertion order. Mutating the returned
    /// vector has no effect on the store.
    pub async fn list(&self) -> Vec<Company> {
        self.simulate_latency().await;
        let guard = self.companies.lock().expect("directory mutex poisoned");
        guard.clone()
    }

    /// Copy of the record matching `id`.
    pub async fn get(&self, id: u32) -> Result<Company, DirectoryError> {
        self.simulate_latency().await;
        let guard = self.companies.lock().expect("directory mutex poisoned");
        guard
            .iter()
            .find(|company| company.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound)
    }

    /// Validate and append a new record, assigning the next identifier
    /// (strictly greater than every existing one, `1` for an empty store).
    pub async fn create(&self, draft: NewCompany) -> Result<Company, DirectoryError> {
        self.simulate_latency().await;
        draft.validate()?;

        let mut guard = self.companies.lock().expect("directory mutex poisoned");
        let id = guard
            .iter()
            .map(|company| company.id)
            .max()
            .map_or(1, |max| max + 1);
        let company = draft.into_company(id);
        guard.push(company.clone());
        Ok(company)
    }

    /// Merge the supplied fields over the stored record and re-validate.
    /// All-or-nothing: a validation failure leaves the record untouched.
    pub async fn update(
        &self,
        id: u32,
        update: CompanyUpdate,
    ) -> Result<Company, DirectoryError> {
        self.simulate_latency().await;
        let mut guard = self.companies.lock().expect("directory mutex poisoned");
        let slot = guard
            .iter_mut()
            .find(|company| company.id == id)
            .ok_or(DirectoryError::NotFound)?;

        let merged = update.merged(slot);
        merged.validate()?;
        *slot = merged.clone();
        Ok(merged)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

/// Failures surfaced by directory operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("company not found")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
