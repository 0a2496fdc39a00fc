use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use waypoint::{
    ConfigError, CostReport, Edge, GraphSnapshot, LabelCodec, Node, NodeId, ReservedLabel,
    RouteError, RouteOutcome, RoutePlanner, SearchConfig, SelectionPolicy,
};

const POLICIES: [SelectionPolicy; 2] = [SelectionPolicy::MinDistance, SelectionPolicy::DiscoveryOrder];

fn abc_codec() -> LabelCodec {
    LabelCodec::new(ReservedLabel::new(1, "A"), ReservedLabel::new(3, "C"))
}

fn planner(labels: &[&str], edges: &[(NodeId, NodeId, f64)], policy: SelectionPolicy) -> RoutePlanner<f64> {
    let snapshot = GraphSnapshot::new(
        labels.iter().map(|&l| Node::new(l)).collect(),
        edges.iter().map(|&(s, t, c)| Edge::new(s, t, c)).collect(),
    );
    RoutePlanner::new(snapshot, abc_codec(), SearchConfig::default().with_policy(policy)).unwrap()
}

#[test]
fn single_edge_between_endpoints() {
    for policy in POLICIES {
        let route = planner(&["A", "C"], &[(1, 3, 4.5)], policy).route_endpoints().unwrap();
        assert_eq!(route.path(), &["A", "C"]);
        assert_eq!(route.cost(), Some(CostReport { recorded: 4.5, summed: 4.5 }));
    }
}

#[test]
fn start_equals_target() {
    for policy in POLICIES {
        let route = planner(&["A", "C"], &[(1, 3, 4.5)], policy).route("A", "A").unwrap();
        assert_eq!(route.path(), &["A"]);
        assert_eq!(route.cost(), Some(CostReport { recorded: 0.0, summed: 0.0 }));
        assert_eq!(route.expansions, 1);
    }
}

#[test]
fn three_node_chain() {
    for policy in POLICIES {
        let route = planner(&["A", "node_2", "C"], &[(1, 2, 2.0), (2, 3, 3.0)], policy)
            .route_endpoints()
            .unwrap();
        assert_eq!(route.path(), &["A", "node_2", "C"]);
        assert_eq!(route.cost(), Some(CostReport { recorded: 5.0, summed: 5.0 }));
    }
}

#[test]
fn disconnected_target() {
    for policy in POLICIES {
        let route = planner(&["A", "node_2", "C"], &[(1, 2, 2.0)], policy)
            .route_endpoints()
            .unwrap();
        assert_eq!(route.outcome, RouteOutcome::NoPath);
        let target = route.table.get(3).unwrap();
        assert!(target.distance.is_infinite());
        assert_eq!(target.parent, None);
        assert!(!target.visited);
    }
}

#[test]
fn missing_start_label() {
    let planner = planner(&["node_2", "C"], &[(2, 3, 1.0)], SelectionPolicy::MinDistance);
    assert_eq!(
        planner.route_endpoints().unwrap_err(),
        RouteError::Config(ConfigError::UnknownEndpoint("A".to_string()))
    );
}

#[test]
fn loads_json_graph_with_default_codec() {
    // same shape as the generated graph files
    let json = r#"{
        "nodes": [
            {"label": "Erde"},
            {"label": "node_1"},
            {"label": "node_2"},
            {"label": "node_3"},
            {"label": "b3-r7-r4nd7"}
        ],
        "edges": [
            {"source": 18, "target": 1, "cost": 0.04},
            {"source": 1, "target": 2, "cost": 0.11},
            {"source": 18, "target": 3, "cost": 0.5},
            {"source": 3, "target": 246, "cost": 0.1},
            {"source": 2, "target": 246, "cost": 0.09}
        ]
    }"#;
    let snapshot: GraphSnapshot<f64> = serde_json::from_str(json).unwrap();
    let config: SearchConfig = serde_json::from_str(r#"{"policy": "min_distance", "tolerance": 1e-12}"#).unwrap();

    let planner = RoutePlanner::new(snapshot, LabelCodec::default(), config).unwrap();
    let route = planner.route_endpoints().unwrap();

    assert_eq!(route.path(), &["Erde", "node_1", "node_2", "b3-r7-r4nd7"]);
    let cost = route.cost().unwrap();
    assert!((cost.summed - 0.24).abs() < 1e-12);
    assert!(!route.is_diverged());
}

#[test]
fn f32_costs() {
    let snapshot: GraphSnapshot<f32> = GraphSnapshot::new(
        vec![Node::new("A"), Node::new("node_2"), Node::new("C")],
        vec![Edge::new(1, 2, 0.5f32), Edge::new(2, 3, 0.25f32), Edge::new(1, 3, 1.0f32)],
    );
    let planner = RoutePlanner::new(snapshot, abc_codec(), SearchConfig::default()).unwrap();
    let route = planner.route_endpoints().unwrap();
    assert_eq!(route.path(), &["A", "node_2", "C"]);
    assert_eq!(route.cost().map(|c| c.recorded), Some(0.75f32));
}

/// Random graph over ids 0..n, endpoints reserved as 0 and n - 1
fn random_graph(rng: &mut StdRng, n: u64, edge_count: usize, uniform: bool) -> (LabelCodec, GraphSnapshot<f64>) {
    let codec = LabelCodec::new(ReservedLabel::new(0, "origin"), ReservedLabel::new(n - 1, "goal"));
    let nodes = (0..n).map(|id| Node::new(codec.to_label(id))).collect();
    let edges = (0..edge_count)
        .map(|_| {
            let cost = if uniform { 1.0 } else { rng.random_range(0.0..5.0) };
            Edge::new(rng.random_range(0..n), rng.random_range(0..n), cost)
        })
        .collect();
    (codec, GraphSnapshot::new(nodes, edges))
}

#[test]
fn uniform_costs_make_policies_agree() {
    let mut rng = StdRng::seed_from_u64(246);
    for _ in 0..50 {
        let (codec, snapshot) = random_graph(&mut rng, 40, 90, true);

        let heap = RoutePlanner::new(snapshot.clone(), codec.clone(), SearchConfig::default()).unwrap();
        let fifo = RoutePlanner::new(
            snapshot,
            codec,
            SearchConfig::default().with_policy(SelectionPolicy::DiscoveryOrder),
        )
        .unwrap();

        let a = heap.route_endpoints().unwrap();
        let b = fifo.route_endpoints().unwrap();

        assert_eq!(a.is_found(), b.is_found());
        assert_eq!(a.cost().map(|c| c.recorded), b.cost().map(|c| c.recorded));
        assert!(!a.is_diverged());
        assert!(!b.is_diverged());
    }
}

#[test]
fn repeated_queries_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(18);
    for policy in POLICIES {
        let (codec, snapshot) = random_graph(&mut rng, 60, 150, false);
        let config = SearchConfig::default().with_policy(policy);

        let planner = RoutePlanner::new(snapshot.clone(), codec.clone(), config.clone()).unwrap();
        let rebuilt = RoutePlanner::new(snapshot, codec, config).unwrap();

        let first = planner.route_endpoints().unwrap();
        assert_eq!(first, planner.route_endpoints().unwrap());
        assert_eq!(first, rebuilt.route_endpoints().unwrap());
    }
}
