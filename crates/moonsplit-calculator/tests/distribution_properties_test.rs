use moonsplit_calculator::*;
use proptest::prelude::*;

fn method_strategy() -> impl Strategy<Value = AllocationMethod> {
    prop_oneof![Just(AllocationMethod::EqualSplit), Just(AllocationMethod::AreaWeighted)]
}

fn tenant_strategy() -> impl Strategy<Value = TenantInput> {
    (0.5f64..80.0, proptest::option::of(0.0f64..3000.0)).prop_map(|(area, baseline)| TenantInput {
        id: String::new(),
        display_name: String::new(),
        private_area_m2: area,
        solo_rent_baseline: baseline,
    })
}

fn expense_strategy() -> impl Strategy<Value = ExpenseInput> {
    (0.0f64..500.0, method_strategy()).prop_map(|(amount, method)| ExpenseInput {
        id: String::new(),
        label: String::new(),
        amount,
        allocation_method: method,
    })
}

fn request_strategy() -> impl Strategy<Value = DistributionRequest> {
    (
        50.0f64..10_000.0,
        0.0f64..120.0,
        proptest::collection::vec(tenant_strategy(), 2..=4),
        proptest::collection::vec(expense_strategy(), 0..6),
    )
        .prop_map(|(total_rent, common_area_m2, tenants, expenses)| DistributionRequest {
            total_rent,
            common_area_m2,
            tenants,
            expenses,
            tenant_count: None,
        })
}

proptest! {
    #[test]
    fn rent_is_conserved(request in request_strategy()) {
        let result = calculate(&request);
        prop_assert!(result.validation.is_valid);
        let relative = (result.total_rent_distributed - request.total_rent).abs() / request.total_rent;
        prop_assert!(relative < 1e-9);

        let expected_group = result.total_rent_distributed + result.total_expenses_distributed;
        prop_assert!((result.total_monthly_group - expected_group).abs() <= 1e-9 * expected_group.max(1.0));
    }

    #[test]
    fn rows_are_internally_consistent(request in request_strategy()) {
        let result = calculate(&request);
        for row in &result.tenants {
            prop_assert_eq!(row.total_rent_share, row.private_rent_share + row.common_rent_share);
            prop_assert_eq!(row.total_monthly, row.total_rent_share + row.total_expense_share);
            if let Some(savings) = row.annual_savings {
                prop_assert!(savings >= 0.0);
            }
        }
    }

    #[test]
    fn expenses_follow_their_method(request in request_strategy()) {
        let result = calculate(&request);
        let count = result.tenants.len() as f64;
        for (index, expense) in request.expenses.iter().enumerate() {
            let shares: Vec<f64> =
                result.tenants.iter().map(|t| t.expense_allocations[index].amount).collect();
            let total: f64 = shares.iter().sum();
            prop_assert!((total - expense.amount).abs() <= 1e-9 * expense.amount.max(1.0));
            if expense.allocation_method == AllocationMethod::EqualSplit {
                for share in shares {
                    prop_assert_eq!(share, expense.amount / count);
                }
            }
        }
    }

    #[test]
    fn engine_is_deterministic(request in request_strategy()) {
        let first = calculate(&request);
        let second = calculate(&request.clone());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(project(&first, request.common_area_m2), project(&second, request.common_area_m2));
    }

    #[test]
    fn redistributed_cents_balance_exactly(request in request_strategy()) {
        let result = calculate(&request);
        let rounded = redistribute_cents(&result, request.common_area_m2).unwrap();
        let rent: i64 = rounded.tenants.iter().map(|t| t.rent_cents).sum();
        let expenses: i64 = rounded.tenants.iter().map(|t| t.expense_cents).sum();
        let monthly: i64 = rounded.tenants.iter().map(|t| t.monthly_cents).sum();
        prop_assert_eq!(rent, rounded.rent_cents);
        prop_assert_eq!(expenses, rounded.expense_cents);
        prop_assert_eq!(monthly, rounded.monthly_cents);
    }

    #[test]
    fn zero_private_area_is_always_rejected(
        rent in -100.0f64..5000.0,
        common in 0.0f64..50.0,
        count in 2usize..=4,
    ) {
        let request = DistributionRequest {
            total_rent: rent,
            common_area_m2: common,
            tenants: (0..count).map(|_| TenantInput::default()).collect(),
            expenses: Vec::new(),
            tenant_count: None,
        };
        let result = calculate(&request);
        prop_assert!(!result.validation.is_valid);
        prop_assert!(result.validation.has_issue(IssueCode::PrivateAreaPositive));
        prop_assert_eq!(result.total_monthly_group, 0.0);
    }
}

#[test]
fn area_weighted_extremes() {
    let request = DistributionRequest {
        total_rent: 800.0,
        common_area_m2: 12.0,
        tenants: vec![
            TenantInput { private_area_m2: 0.0, ..Default::default() },
            TenantInput { private_area_m2: 18.0, ..Default::default() },
        ],
        expenses: vec![ExpenseInput {
            amount: 75.0,
            allocation_method: AllocationMethod::AreaWeighted,
            ..Default::default()
        }],
        tenant_count: None,
    };
    let result = calculate(&request);
    assert_eq!(result.tenants[0].expense_allocations[0].amount, 0.0);
    assert_eq!(result.tenants[1].expense_allocations[0].amount, 75.0);
}
