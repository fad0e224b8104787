//! Company directory: the authoritative in-memory record store for a session.
//!
//! The store simulates the latency of a network round trip so callers see the
//! same asynchronous surface a real backend would present. Phase progression
//! (`Ideation -> IncuHatch -> IncuBoost`) is descriptive for callers; the
//! directory only enforces enum membership, not transition legality.

pub mod domain;
pub mod seed;
pub mod store;

pub use domain::{Company, CompanyStatus, CompanyUpdate, NewCompany, Phase, ValidationError};
pub use store::{CompanyDirectory, DirectoryError};
