use salvage_structs::*;

fn evaluator() -> CostEvaluator {
    CostEvaluator::new(20, 10, 7, 6)
}

#[test]
fn test_getters() {
    let ce = evaluator();
    assert_eq!(ce.weight_capacity_penalty(), 20);
    assert_eq!(ce.volume_capacity_penalty(), 10);
    assert_eq!(ce.salvage_capacity_penalty(), 7);
    assert_eq!(ce.time_warp_penalty(), 6);
}

#[test]
fn test_capacity_penalties() {
    let ce = evaluator();

    assert_eq!(ce.weight_penalty(5, 10), 0);
    assert_eq!(ce.weight_penalty(10, 10), 0);
    assert_eq!(ce.weight_penalty(13, 10), 3 * 20);
    assert_eq!(ce.weight_penalty_excess(4), 4 * 20);

    assert_eq!(ce.volume_penalty(9, 10), 0);
    assert_eq!(ce.volume_penalty(12, 10), 2 * 10);

    assert_eq!(ce.salvage_penalty(0, 0), 0);
    assert_eq!(ce.salvage_penalty(3, 1), 2 * 7);
}

#[test]
fn test_tw_penalty() {
    let ce = evaluator();
    assert_eq!(ce.tw_penalty(0), 0);
    assert_eq!(ce.tw_penalty(11), 66);
    assert_eq!(ce.tw_penalty(-4), 0);
}

#[test]
fn test_penalties_saturate() {
    let ce = CostEvaluator::new(1000, 1000, 1000, 1000);
    assert_eq!(ce.weight_penalty_excess(Load::MAX), Cost::MAX);
    assert_eq!(ce.tw_penalty(Duration::MAX), Cost::MAX);
}

#[test]
fn test_route_penalty() {
    let ce = evaluator();
    let route = RouteStats {
        distance: 100,
        weight: 12,
        weight_capacity: 10,
        volume: 8,
        volume_capacity: 10,
        salvage: 2,
        salvage_capacity: 1,
        time_warp: 3,
        prizes: 0,
    };
    assert!(!route.is_feasible());
    assert_eq!(ce.route_penalty(&route), 2 * 20 + 7 + 3 * 6);
}

#[test]
fn test_penalised_cost_and_cost() {
    let ce = evaluator();

    let feasible = SolutionStats {
        distance: 250,
        uncollected_prizes: 15,
        ..Default::default()
    };
    assert!(feasible.is_feasible());
    assert_eq!(ce.penalised_cost(&feasible), 265);
    assert_eq!(ce.cost(&feasible), 265);

    let infeasible = SolutionStats {
        distance: 250,
        uncollected_prizes: 15,
        excess_weight: 1,
        excess_volume: 2,
        excess_salvage: 3,
        time_warp: 4,
    };
    assert!(!infeasible.is_feasible());
    assert_eq!(ce.penalised_cost(&infeasible), 265 + 20 + 2 * 10 + 3 * 7 + 4 * 6);
    assert_eq!(ce.cost(&infeasible), Cost::MAX);
}

#[test]
fn test_solution_from_routes() {
    let routes = vec![
        RouteStats {
            distance: 40,
            weight: 12,
            weight_capacity: 10,
            volume: 5,
            volume_capacity: 10,
            prizes: 30,
            ..Default::default()
        },
        RouteStats {
            distance: 60,
            volume: 14,
            volume_capacity: 10,
            salvage: 2,
            salvage_capacity: 0,
            time_warp: 9,
            prizes: 20,
            ..Default::default()
        },
    ];
    let stats = SolutionStats::from_routes(&routes, 80);
    assert_eq!(stats.distance(), 100);
    assert_eq!(stats.uncollected_prizes(), 30);
    assert_eq!(stats.excess_weight(), 2);
    assert_eq!(stats.excess_volume(), 4);
    assert_eq!(stats.excess_salvage(), 2);
    assert_eq!(stats.time_warp(), 9);
    assert!(stats.has_excess_weight());
    assert!(stats.has_excess_volume());
    assert!(stats.has_excess_salvage());
    assert!(stats.has_time_warp());
}

#[test]
fn test_solution_stats_from_json() {
    let stats: SolutionStats =
        serde_json::from_str(r#"{"distance": 120, "time_warp": 5}"#).unwrap();
    assert_eq!(stats.distance, 120);
    assert_eq!(stats.excess_weight, 0);
    assert!(stats.has_time_warp());
    assert!(!stats.has_excess_volume());

    let ce: CostEvaluator = serde_json::from_value(serde_json::json!({
        "weight_capacity_penalty": 1,
        "volume_capacity_penalty": 2,
        "salvage_capacity_penalty": 3,
        "time_warp_penalty": 4,
    }))
    .unwrap();
    assert_eq!(ce, CostEvaluator::new(1, 2, 3, 4));
}
