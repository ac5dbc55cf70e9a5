//! Memoization support for repeated computations.
//!
//! A form recomputes on every keystroke, usually with an input it has seen
//! moments before. `RequestKey` gives a request structural identity (floats
//! compared by bit pattern, so `NaN` inputs still hit) and `LruCache` keeps the
//! most recently used results.

use moonsplit_types::{AllocationMethod, DistributionRequest};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Least-recently-used cache with a fixed capacity.
///
/// A capacity of zero stores nothing.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    entries: HashMap<K, (V, u64)>,
    clock: u64,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity, entries: HashMap::with_capacity(capacity), clock: 0 }
    }

    /// Get a value, marking it as most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.clock += 1;
        let clock = self.clock;
        self.entries.get_mut(key).map(|(value, last_used)| {
            *last_used = clock;
            &*value
        })
    }

    /// Insert a value, evicting the least recently used entry when full
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        self.clock += 1;
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            self.evict_lru();
        }
        self.entries.insert(key, (value, self.clock));
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.clock = 0;
    }

    fn evict_lru(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, (_, last_used))| *last_used)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}

/// Cache key giving a `DistributionRequest` structural equality and hashing.
#[derive(Debug, Clone)]
pub struct RequestKey(DistributionRequest);

impl RequestKey {
    pub fn new(request: &DistributionRequest) -> Self {
        Self(request.clone())
    }

    pub fn request(&self) -> &DistributionRequest {
        &self.0
    }
}

fn same_bits(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}

fn same_optional_bits(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => same_bits(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for RequestKey {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.0, &other.0);
        same_bits(a.total_rent, b.total_rent)
            && same_bits(a.common_area_m2, b.common_area_m2)
            && a.tenant_count == b.tenant_count
            && a.tenants.len() == b.tenants.len()
            && a.expenses.len() == b.expenses.len()
            && a.tenants.iter().zip(&b.tenants).all(|(x, y)| {
                x.id == y.id
                    && x.display_name == y.display_name
                    && same_bits(x.private_area_m2, y.private_area_m2)
                    && same_optional_bits(x.solo_rent_baseline, y.solo_rent_baseline)
            })
            && a.expenses.iter().zip(&b.expenses).all(|(x, y)| {
                x.id == y.id
                    && x.label == y.label
                    && same_bits(x.amount, y.amount)
                    && x.allocation_method == y.allocation_method
            })
    }
}

impl Eq for RequestKey {}

impl Hash for RequestKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let request = &self.0;
        request.total_rent.to_bits().hash(state);
        request.common_area_m2.to_bits().hash(state);
        request.tenant_count.hash(state);

        request.tenants.len().hash(state);
        for tenant in &request.tenants {
            tenant.id.hash(state);
            tenant.display_name.hash(state);
            tenant.private_area_m2.to_bits().hash(state);
            tenant.solo_rent_baseline.map(f64::to_bits).hash(state);
        }

        request.expenses.len().hash(state);
        for expense in &request.expenses {
            expense.id.hash(state);
            expense.label.hash(state);
            expense.amount.to_bits().hash(state);
            match expense.allocation_method {
                AllocationMethod::EqualSplit => 0u8.hash(state),
                AllocationMethod::AreaWeighted => 1u8.hash(state),
            }
        }
    }
}
