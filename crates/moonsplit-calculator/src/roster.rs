//! Editable tenant and expense lists.
//!
//! Every edit returns a new list with one element replaced, added or removed;
//! the receiver is left untouched. Shrinking the tenant roster only hides the
//! trailing rows, so growing it again brings the previous data back before any
//! demo rows are appended.

use moonsplit_types::{AllocationMethod, DistributionRequest, ExpenseInput, TenantInput};
use tracing::debug;
use uuid::Uuid;

/// Demo rows used to pre-fill new tenants: name, private area, solo rent.
pub const DEMO_TENANTS: [(&str, f64, f64); 4] = [
    ("Ana", 12.0, 900.0),
    ("Bruno", 15.0, 1000.0),
    ("Carla", 9.0, 850.0),
    ("Diego", 10.0, 800.0),
];
pub const DEMO_TOTAL_RENT: f64 = 1800.0;
pub const DEMO_COMMON_AREA_M2: f64 = 30.0;

fn new_row_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

/// Demo defaults for the tenant at `position`, with a fresh unique id.
pub fn demo_tenant(position: usize) -> TenantInput {
    let (display_name, private_area_m2, solo_rent_baseline) = match DEMO_TENANTS.get(position) {
        Some((name, area, baseline)) => (name.to_string(), *area, Some(*baseline)),
        None => (format!("Tenant {}", position + 1), 10.0, None),
    };
    TenantInput { id: new_row_id("tenant"), display_name, private_area_m2, solo_rent_baseline }
}

/// The pre-seeded calculator: three demo tenants and two shared expenses.
pub fn demo_request() -> DistributionRequest {
    let tenants = DEMO_TENANTS
        .iter()
        .take(3)
        .enumerate()
        .map(|(i, (name, area, baseline))| TenantInput {
            id: format!("tenant-{}", i + 1),
            display_name: name.to_string(),
            private_area_m2: *area,
            solo_rent_baseline: Some(*baseline),
        })
        .collect();

    DistributionRequest {
        total_rent: DEMO_TOTAL_RENT,
        common_area_m2: DEMO_COMMON_AREA_M2,
        tenants,
        expenses: vec![
            ExpenseInput {
                id: "expense-1".to_string(),
                label: "Internet".to_string(),
                amount: 90.0,
                allocation_method: AllocationMethod::EqualSplit,
            },
            ExpenseInput {
                id: "expense-2".to_string(),
                label: "Electricity".to_string(),
                amount: 120.0,
                allocation_method: AllocationMethod::AreaWeighted,
            },
        ],
        tenant_count: None,
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TenantRoster {
    rows: Vec<TenantInput>,
    active: usize,
}

impl TenantRoster {
    pub fn new(rows: Vec<TenantInput>) -> Self {
        let active = rows.len();
        Self { rows, active }
    }

    pub fn with_demo_tenants(count: usize) -> Self {
        Self::new((0..count).map(demo_tenant).collect())
    }

    pub fn active_tenants(&self) -> &[TenantInput] {
        &self.rows[..self.active]
    }

    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Rows kept aside by an earlier shrink.
    pub fn hidden_len(&self) -> usize {
        self.rows.len() - self.active
    }

    /// Sets the number of active tenants.
    pub fn resize(&self, count: usize) -> Self {
        let mut rows = self.rows.clone();
        while rows.len() < count {
            rows.push(demo_tenant(rows.len()));
        }
        debug!(from = self.active, to = count, kept = rows.len(), "Tenant roster resized");
        Self { rows, active: count }
    }

    /// Replaces the active tenant at `index`. Out-of-range indices leave the roster unchanged.
    pub fn with_tenant(&self, index: usize, tenant: TenantInput) -> Self {
        let mut next = self.clone();
        if index < self.active {
            next.rows[index] = tenant;
        }
        next
    }

    /// Inserts a demo-defaulted tenant after the last active row.
    pub fn with_added_tenant(&self) -> Self {
        let mut next = self.clone();
        next.rows.insert(self.active, demo_tenant(self.active));
        next.active += 1;
        next
    }

    pub fn without_tenant(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < self.active {
            next.rows.remove(index);
            next.active -= 1;
        }
        next
    }

    /// Snapshot of the active rows as an engine request.
    pub fn to_request(
        &self,
        total_rent: f64,
        common_area_m2: f64,
        expenses: &ExpenseList,
    ) -> DistributionRequest {
        DistributionRequest {
            total_rent,
            common_area_m2,
            tenants: self.active_tenants().to_vec(),
            expenses: expenses.as_slice().to_vec(),
            tenant_count: Some(self.active),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseList {
    items: Vec<ExpenseInput>,
}

impl ExpenseList {
    pub fn new(items: Vec<ExpenseInput>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[ExpenseInput] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an empty, equally split expense.
    pub fn with_added_expense(&self) -> Self {
        let mut next = self.clone();
        next.items.push(ExpenseInput {
            id: new_row_id("expense"),
            label: String::new(),
            amount: 0.0,
            allocation_method: AllocationMethod::EqualSplit,
        });
        next
    }

    pub fn with_expense(&self, index: usize, expense: ExpenseInput) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.items.get_mut(index) {
            *slot = expense;
        }
        next
    }

    pub fn without_expense(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.items.len() {
            next.items.remove(index);
        }
        next
    }
}
