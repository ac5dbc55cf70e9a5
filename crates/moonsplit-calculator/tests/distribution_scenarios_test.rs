use moonsplit_calculator::*;

fn tenant(name: &str, area: f64, baseline: Option<f64>) -> TenantInput {
    TenantInput {
        id: name.to_lowercase(),
        display_name: name.to_string(),
        private_area_m2: area,
        solo_rent_baseline: baseline,
    }
}

fn expense(label: &str, amount: f64, method: AllocationMethod) -> ExpenseInput {
    ExpenseInput {
        id: label.to_lowercase(),
        label: label.to_string(),
        amount,
        allocation_method: method,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn scenario_a() -> DistributionRequest {
    DistributionRequest {
        total_rent: 1800.0,
        common_area_m2: 30.0,
        tenants: vec![
            tenant("Ana", 12.0, Some(900.0)),
            tenant("Bruno", 15.0, Some(1000.0)),
            tenant("Carla", 9.0, Some(850.0)),
        ],
        expenses: vec![
            expense("Internet", 90.0, AllocationMethod::EqualSplit),
            expense("Electricity", 120.0, AllocationMethod::AreaWeighted),
        ],
        tenant_count: None,
    }
}

#[test]
fn scenario_a_mixed_expenses() {
    let result = calculate(&scenario_a());

    assert!(result.validation.is_valid);
    let monthly: Vec<f64> = result.tenants.iter().map(|t| round2(t.total_monthly)).collect();
    assert_eq!(monthly, vec![670.00, 761.82, 578.18]);
    let rent: Vec<f64> = result.tenants.iter().map(|t| round2(t.total_rent_share)).collect();
    assert_eq!(rent, vec![600.00, 681.82, 518.18]);
    let savings: Vec<f64> =
        result.tenants.iter().map(|t| t.annual_savings.unwrap().round()).collect();
    assert_eq!(savings, vec![2760.0, 2858.0, 3262.0]);

    assert_eq!(round2(result.total_rent_distributed), 1800.00);
    assert_eq!(round2(result.total_expenses_distributed), 210.00);
    assert_eq!(round2(result.total_monthly_group), 2010.00);
    assert!((result.total_private_area_sum - 36.0).abs() < 1e-12);
}

#[test]
fn scenario_a_expense_allocations() {
    let result = calculate(&scenario_a());

    for row in &result.tenants {
        assert!((row.expense_allocations[0].amount - 30.0).abs() < 1e-9);
        assert_eq!(row.expense_allocations[0].allocation_method, AllocationMethod::EqualSplit);
    }
    let electricity: Vec<f64> =
        result.tenants.iter().map(|t| round2(t.expense_allocations[1].amount)).collect();
    assert_eq!(electricity, vec![40.0, 50.0, 30.0]);
}

#[test]
fn scenario_b_zero_private_area() {
    let request = DistributionRequest {
        total_rent: 1200.0,
        common_area_m2: 20.0,
        tenants: vec![tenant("Ana", 0.0, None), tenant("Bruno", 0.0, None)],
        expenses: Vec::new(),
        tenant_count: None,
    };
    let result = calculate(&request);

    assert!(!result.validation.is_valid);
    assert!(result.validation.has_issue(IssueCode::PrivateAreaPositive));
    assert_eq!(result.total_monthly_group, 0.0);
    assert!(result.tenants.iter().all(|t| t.total_monthly == 0.0));
}

#[test]
fn scenario_c_no_common_area() {
    let request = DistributionRequest {
        total_rent: 1000.0,
        common_area_m2: 0.0,
        tenants: vec![tenant("Ana", 10.0, None), tenant("Bruno", 30.0, None)],
        expenses: Vec::new(),
        tenant_count: None,
    };
    let result = calculate(&request);

    assert!(result.validation.is_valid);
    for row in &result.tenants {
        assert_eq!(row.common_rent_share, 0.0);
    }
    assert!((result.tenants[0].private_rent_share - 250.0).abs() < 1e-9);
    assert!((result.tenants[1].private_rent_share - 750.0).abs() < 1e-9);
}

#[test]
fn scenario_d_absent_baseline_differs_from_zero_savings() {
    let request = DistributionRequest {
        total_rent: 1000.0,
        common_area_m2: 10.0,
        tenants: vec![tenant("Ana", 10.0, None), tenant("Bruno", 10.0, Some(100.0))],
        expenses: vec![expense("Internet", 40.0, AllocationMethod::EqualSplit)],
        tenant_count: None,
    };
    let result = calculate(&request);

    assert_eq!(result.tenants[0].annual_savings, None);
    assert_eq!(result.tenants[1].annual_savings, Some(0.0));

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["tenants"][0].get("annualSavings").is_none());
    assert_eq!(json["tenants"][1]["annualSavings"], 0.0);
}

#[test]
fn malformed_numbers_are_sanitized_not_rejected() {
    let request = DistributionRequest {
        total_rent: 900.0,
        common_area_m2: f64::NAN,
        tenants: vec![
            tenant("Ana", 10.0, Some(f64::INFINITY)),
            tenant("", -4.0, Some(-1.0)),
            tenant("Carla", 20.0, None),
        ],
        expenses: vec![expense("Gas", f64::NAN, AllocationMethod::AreaWeighted)],
        tenant_count: None,
    };
    let result = calculate(&request);

    assert!(result.validation.is_valid);
    assert_eq!(result.tenants[1].display_name, "Tenant 2");
    assert_eq!(result.tenants[1].private_area_m2, 0.0);
    assert_eq!(result.tenants[1].annual_savings, None);
    assert_eq!(result.tenants[0].annual_savings, None);
    assert_eq!(result.total_expenses_distributed, 0.0);
    // Sanitized common area is zero, so only private area drives the rent.
    assert!((result.tenants[0].total_rent_share - 300.0).abs() < 1e-9);
    assert!((result.tenants[1].total_rent_share - 0.0).abs() < 1e-9);
}

#[test]
fn zero_area_tenant_still_pays_common_share() {
    let request = DistributionRequest {
        total_rent: 1000.0,
        common_area_m2: 20.0,
        tenants: vec![tenant("Ana", 0.0, None), tenant("Bruno", 20.0, None)],
        expenses: vec![expense("Power", 100.0, AllocationMethod::AreaWeighted)],
        tenant_count: None,
    };
    let result = calculate(&request);

    assert!(result.validation.is_valid);
    // Effective areas 10 and 30.
    assert!((result.tenants[0].total_rent_share - 250.0).abs() < 1e-9);
    assert_eq!(result.tenants[0].expense_allocations[0].amount, 0.0);
    assert!((result.tenants[1].expense_allocations[0].amount - 100.0).abs() < 1e-9);
}

#[test]
fn too_many_tenants_is_an_error_under_default_policy() {
    let mut request = scenario_a();
    request.tenants.push(tenant("Diego", 10.0, None));
    request.tenants.push(tenant("Eva", 10.0, None));
    let result = calculate(&request);

    assert!(!result.validation.is_valid);
    assert!(result.validation.has_issue(IssueCode::MaxTenants));
    assert_eq!(result.validation.errors[0].message, "tenant count must be 2, 3, or 4");

    let relaxed = DistributionEngine::with_policy(TenantCountPolicy::new(2, 8).unwrap());
    assert!(relaxed.compute(&request).validation.is_valid);
}

#[test]
fn demo_request_matches_scenario_a() {
    let demo = calculate(&demo_request());
    let expected = calculate(&scenario_a());
    assert!((demo.total_monthly_group - expected.total_monthly_group).abs() < 1e-9);
}

fn plain(rent: f64, common: f64, areas: &[f64]) -> DistributionRequest {
    DistributionRequest {
        total_rent: rent,
        common_area_m2: common,
        tenants: areas.iter().map(|area| tenant("T", *area, None)).collect(),
        expenses: Vec::new(),
        tenant_count: None,
    }
}

#[test]
fn infinite_rent_is_invalid_instead_of_distributing_nothing() {
    let result = calculate(&plain(f64::INFINITY, 10.0, &[10.0, 20.0]));
    assert!(!result.validation.is_valid);
    assert!(result.validation.has_issue(IssueCode::RentPositive));
    assert_eq!(result.total_rent_distributed, 0.0);
}

#[test]
fn infinite_common_area_is_reported() {
    let result = calculate(&plain(1000.0, f64::INFINITY, &[10.0, 20.0]));
    assert!(!result.validation.is_valid);
    assert!(result.validation.has_issue(IssueCode::CommonAreaFinite));
}

#[test]
fn overflowing_private_area_sum_is_invalid() {
    let result = calculate(&plain(1000.0, 10.0, &[1e308, 1e308]));
    assert!(!result.validation.is_valid);
    assert!(result.validation.has_issue(IssueCode::PrivateAreaPositive));
}

#[test]
fn every_valid_result_conserves_the_rent() {
    for request in [plain(1000.0, 10.0, &[1e300, 5.0]), plain(1e15, 1e200, &[1e-300, 3.0])] {
        let result = calculate(&request);
        assert!(result.validation.is_valid);
        let relative = (result.total_rent_distributed - request.total_rent).abs() / request.total_rent;
        assert!(relative < 1e-9, "distributed {}", result.total_rent_distributed);
    }
}
