//! The MoOn Split rent distribution engine.
//!
//! Given a total rent, a shared common area, tenants with private room areas
//! and a set of variable shared expenses, this crate computes each tenant's
//! fair monthly share, validates the input and renders a reproducible summary.
//!
//! The pipeline is synchronous and side-effect free:
//! sanitizer → validator → allocator → aggregator, followed by the summary
//! projector and exports as pure functions of the result.

pub mod aggregator;
pub mod allocation;
pub mod allocator;
pub mod cache;
pub mod currency;
pub mod engine;
pub mod error;
pub mod export;
pub mod policy;
pub mod roster;
pub mod rounding;
pub mod sanitizer;
pub mod summary;
pub mod validator;

pub use currency::CurrencyFormat;
pub use engine::{CachedDistributionEngine, DistributionEngine, EngineCacheStats, calculate};
pub use error::{SplitError, SplitResult};
pub use export::Exporter;
pub use policy::TenantCountPolicy;
pub use roster::{ExpenseList, TenantRoster, demo_request};
pub use rounding::{RoundedDistribution, RoundingMode, redistribute_cents};
pub use summary::{SummaryProjector, project};

// Re-export the value objects so callers need a single dependency.
pub use moonsplit_types::*;
