//! Tenant count policy.
//!
//! The weighting math is correct for any number of tenants; the bounds here
//! are a product rule of the calculator and default to 2 to 4 tenants.

use crate::error::{SplitError, SplitResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_TENANTS: usize = 2;
pub const DEFAULT_MAX_TENANTS: usize = 4;

/// Inclusive bounds on the number of tenants a distribution may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantCountPolicy {
    min: usize,
    max: usize,
}

impl Default for TenantCountPolicy {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_TENANTS, max: DEFAULT_MAX_TENANTS }
    }
}

impl TenantCountPolicy {
    /// Create a policy allowing `min..=max` tenants.
    pub fn new(min: usize, max: usize) -> SplitResult<Self> {
        if min == 0 {
            return Err(SplitError::configuration("min_tenants", "min_tenants must be at least 1"));
        }
        if min > max {
            return Err(SplitError::configuration(
                "max_tenants",
                format!("max_tenants ({max}) must be at least min_tenants ({min})"),
            ));
        }
        Ok(Self { min, max })
    }

    /// Smallest allowed tenant count
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest allowed tenant count
    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether `count` tenants are within bounds
    pub fn allows(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }

    /// Human-readable description of the allowed counts, e.g. "2, 3, or 4".
    pub fn describe(&self) -> String {
        if self.min == self.max {
            return self.min.to_string();
        }
        if self.max - self.min > 4 {
            return format!("between {} and {}", self.min, self.max);
        }
        let values: Vec<String> = (self.min..=self.max).map(|n| n.to_string()).collect();
        match values.split_last() {
            Some((last, rest)) if rest.len() == 1 => format!("{} or {}", rest[0], last),
            Some((last, rest)) => format!("{}, or {}", rest.join(", "), last),
            None => String::new(),
        }
    }
}
