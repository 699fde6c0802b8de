use bizcase_modeling::{
    BusinessCaseEngine, CostInputs, DetailedCostInputs, EconomicInputs, FixedCostProfile,
    IrrSolverConfig, MetricError, compute_metrics, net_present_value, project_scenarios, reconcile,
    solve_irr,
};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}

fn example_a() -> EconomicInputs {
    EconomicInputs {
        unit_price: 1200.0,
        unit_cost: 800.0,
        expected_volume: 1000.0,
        fixed_costs: 200_000.0,
        innovation_cost: 100_000.0,
        discount_rate: 0.12,
        time_duration_years: 5,
    }
}

#[test]
fn example_a_metrics() {
    let m = compute_metrics(&example_a());

    assert_eq!(m.gross_margin, 400.0);
    assert_close(m.gross_margin_percent.clone().unwrap(), 33.33, 0.005);
    assert_eq!(m.total_contribution, 400_000.0);
    assert_eq!(m.breakeven_volume, Ok(500.0));
    assert_eq!(m.annual_cash_flow, 200_000.0);
    assert_eq!(m.payback_period_years, Ok(0.5));
    assert_eq!(m.simple_roi_percent, Ok(100.0));
    assert_eq!(m.irr_approx_percent, Ok(200.0));
    assert!(m.warnings.is_empty());

    let npv = m.npv.unwrap();
    assert_eq!((npv * 100.0).round() / 100.0, 620_955.24);
}

#[test]
fn example_a_npv_matches_discounted_sum() {
    let expected: f64 = -100_000.0 + (1..=5).map(|k| 200_000.0 / 1.12f64.powi(k)).sum::<f64>();
    assert_close(compute_metrics(&example_a()).npv.unwrap(), expected, 1e-6);
}

#[test]
fn example_a_true_irr_differs_from_approximation() {
    let inputs = example_a();
    let irr = solve_irr(&inputs, &IrrSolverConfig::default()).unwrap();

    assert_close(irr, 199.165, 0.01);
    assert_close(net_present_value(200_000.0, 100_000.0, irr / 100.0, 5), 0.0, 1e-3);
    assert_ne!(Ok(irr), compute_metrics(&inputs).irr_approx_percent);
}

#[test]
fn example_b_conservative_scenario() {
    let [conservative, _, _] = project_scenarios(&example_a());

    assert_eq!(conservative.name, "Conservative");
    assert_eq!(conservative.multiplier, 0.8);
    assert_eq!(conservative.probability, 25.0);
    assert_close(conservative.adjusted_volume, 800.0, 1e-9);
    assert_close(conservative.adjusted_price, 1176.0, 1e-9);
    assert_close(conservative.gross_margin, 376.0, 1e-9);
    assert_close(conservative.contribution, 300_800.0, 1e-6);
    assert_close(conservative.roi.clone().unwrap(), 0.8, 1e-9);
}

#[test]
fn base_case_reproduces_example_a_metrics() {
    let inputs = example_a();
    let [_, base, _] = project_scenarios(&inputs);
    let m = compute_metrics(&inputs);

    assert_eq!(base.adjusted_volume, inputs.expected_volume);
    assert_eq!(base.adjusted_price, inputs.unit_price);
    assert_eq!(base.contribution, m.total_contribution);
    assert_eq!(base.roi, m.simple_roi_percent);
}

#[test]
fn degenerate_inputs_fail_locally() {
    let inputs = EconomicInputs {
        unit_cost: 1200.0,
        innovation_cost: 0.0,
        time_duration_years: 0,
        ..example_a()
    };

    let m = compute_metrics(&inputs);
    assert_eq!(m.breakeven_volume, Err(MetricError::ZeroMargin));
    assert_eq!(m.payback_period_years, Err(MetricError::ZeroInnovationCost));
    assert_eq!(m.npv, Ok(0.0));
    assert_eq!(
        solve_irr(&inputs, &IrrSolverConfig::default()),
        Err(MetricError::ZeroInnovationCost)
    );

    for scenario in project_scenarios(&inputs) {
        assert_eq!(scenario.roi, Err(MetricError::ZeroInnovationCost));
    }
}

#[test]
fn detailed_inputs_reconcile_to_example_a() {
    let detailed = DetailedCostInputs {
        materials_per_unit: 450.0,
        labor_per_unit: 250.0,
        logistics_per_unit: 70.0,
        warranty_per_unit: 30.0,
        rnd_costs: 90_000.0,
        marketing_costs: 40_000.0,
        admin_costs: 20_000.0,
        equipment_costs: 26_000.0,
        overhead_percentage: 2.0,
        unit_price: 1200.0,
        expected_volume: 1000.0,
        innovation_cost: 100_000.0,
        discount_rate: 0.12,
        time_duration_years: 5,
        profile: Some(FixedCostProfile::Itemized),
        ..DetailedCostInputs::default()
    };

    assert_eq!(reconcile(&detailed), example_a());
    assert_eq!(reconcile(&detailed), reconcile(&detailed));
}

#[test]
fn report_serializes_for_presentation_layer() {
    let report = BusinessCaseEngine::default().evaluate(&CostInputs::Essential(example_a()));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["scenarios"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["metrics"]["breakevenVolume"], serde_json::json!({ "Ok": 500.0 }));
    assert_eq!(json["inputs"]["timeDurationYears"], serde_json::json!(5));
    assert_eq!(json["summary"]["totalProbability"], serde_json::json!(100.0));
}

#[test]
fn report_reads_back_bit_for_bit() {
    let inputs = CostInputs::Essential(EconomicInputs {
        unit_price: 10.0,
        unit_cost: 4.0,
        expected_volume: 100.0,
        fixed_costs: 200.0,
        innovation_cost: 300.0,
        discount_rate: 0.1,
        time_duration_years: 3,
    });
    let report = BusinessCaseEngine::default().evaluate(&inputs);

    let text = serde_json::to_string(&report).unwrap();
    let back: bizcase_modeling::BusinessCaseReport = serde_json::from_str(&text).unwrap();

    assert_eq!(back, report);
    let optimistic_roi = report.scenarios[2].roi.clone().unwrap();
    assert_eq!(back.scenarios[2].roi.clone().unwrap().to_bits(), optimistic_roi.to_bits());
}
