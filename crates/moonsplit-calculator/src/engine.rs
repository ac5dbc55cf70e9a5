//! The distribution pipeline: sanitize, validate, allocate, aggregate.

use crate::aggregator::aggregate;
use crate::allocator::{allocate, zero_filled};
use crate::cache::{LruCache, RequestKey};
use crate::policy::TenantCountPolicy;
use crate::sanitizer::{sanitize_expenses, sanitize_non_negative_number, sanitize_tenants};
use crate::validator::{ValidationInput, validate};
use moonsplit_types::{DistributionRequest, DistributionResult};
use tracing::{debug, instrument, trace};

/// Default number of results kept by [`CachedDistributionEngine`].
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Stateless distribution engine.
///
/// `compute` is referentially transparent and never fails: malformed input is
/// sanitized and structural problems come back as validation errors together
/// with an all-zero result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributionEngine {
    policy: TenantCountPolicy,
}

impl DistributionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: TenantCountPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &TenantCountPolicy {
        &self.policy
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(rows = request.tenants.len(), expenses = request.expenses.len())
    )]
    pub fn compute(&self, request: &DistributionRequest) -> DistributionResult {
        let effective = request.effective_tenant_count();
        let tenants = sanitize_tenants(&request.tenants[..effective]);
        let expenses = sanitize_expenses(&request.expenses);
        let total_rent = sanitize_non_negative_number(request.total_rent);
        let common_area_m2 = sanitize_non_negative_number(request.common_area_m2);

        let validation = validate(
            &ValidationInput {
                total_rent: request.total_rent,
                common_area_m2: request.common_area_m2,
                raw_row_count: request.tenants.len(),
                tenants: &tenants,
            },
            &self.policy,
        );

        let allocation = if validation.is_valid && !tenants.is_empty() {
            allocate(&tenants, &expenses, total_rent, common_area_m2)
        } else {
            zero_filled(&tenants, &expenses)
        };

        debug!(
            tenants = tenants.len(),
            is_valid = validation.is_valid,
            errors = validation.errors.len(),
            warnings = validation.warnings.len(),
            "Distribution computed"
        );

        aggregate(allocation, validation)
    }
}

/// Computes a distribution with the default tenant count policy.
pub fn calculate(request: &DistributionRequest) -> DistributionResult {
    DistributionEngine::default().compute(request)
}

/// A [`DistributionEngine`] memoized on the exact request.
#[derive(Debug)]
pub struct CachedDistributionEngine {
    engine: DistributionEngine,
    results: LruCache<RequestKey, DistributionResult>,
    hits: usize,
    misses: usize,
}

impl Default for CachedDistributionEngine {
    fn default() -> Self {
        Self::new(DistributionEngine::default(), DEFAULT_CACHE_CAPACITY)
    }
}

impl CachedDistributionEngine {
    pub fn new(engine: DistributionEngine, capacity: usize) -> Self {
        Self { engine, results: LruCache::new(capacity), hits: 0, misses: 0 }
    }

    pub fn engine(&self) -> &DistributionEngine {
        &self.engine
    }

    /// Returns the cached result for a structurally equal request, computing
    /// and storing it on a miss.
    pub fn compute(&mut self, request: &DistributionRequest) -> DistributionResult {
        let key = RequestKey::new(request);
        if let Some(result) = self.results.get(&key) {
            self.hits += 1;
            trace!(hits = self.hits, "Distribution cache hit");
            return result.clone();
        }

        self.misses += 1;
        trace!(misses = self.misses, "Distribution cache miss");
        let result = self.engine.compute(request);
        self.results.put(key, result.clone());
        result
    }

    pub fn clear(&mut self) {
        self.results.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn stats(&self) -> EngineCacheStats {
        EngineCacheStats {
            capacity: self.results.capacity(),
            size: self.results.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Cache performance counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineCacheStats {
    pub capacity: usize,
    pub size: usize,
    pub hits: usize,
    pub misses: usize,
}

impl EngineCacheStats {
    /// Hit rate as a percentage of all lookups
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 { 0.0 } else { (self.hits as f64 / total as f64) * 100.0 }
    }
}
