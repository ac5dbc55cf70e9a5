//! MoOn Split Types
//!
//! This crate defines the value objects exchanged with the rent distribution
//! engine (`moonsplit-calculator`): the request a form-driven caller builds, the
//! diagnostics the validator emits, and the per-tenant result rows. Keeping them
//! here lets the CLI and any rendering layer depend on the data shapes without
//! pulling in the engine itself.

#![deny(missing_docs)]

pub mod loose;
mod types;

pub use types::{
    AllocationMethod, DistributionRequest, DistributionResult, ExpenseAllocation, ExpenseInput,
    IssueCode, Severity, TenantInput, TenantResult, ValidationIssue, ValidationReport,
};
