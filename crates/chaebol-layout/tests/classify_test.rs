use chaebol_core::{Company, ControllerHolding, OwnershipRelation};
use chaebol_layout::classify::classify_edges;
use chaebol_layout::index::OwnershipIndex;
use chaebol_layout::resolve::primary_parents;
use chaebol_layout::tree::build_tree;

fn company(id: &str) -> Company {
    Company {
        id: id.to_string(),
        group_id: "g".to_string(),
        name: id.to_string(),
        is_listed: false,
        is_holding: false,
        is_controller: false,
        category: String::new(),
        stock_code: None,
        stock_price: None,
        price_change: None,
        price_change_percent: None,
        market_cap: None,
        sector: None,
    }
}

fn controller(id: &str) -> Company {
    let mut c = company(id);
    c.is_controller = true;
    c
}

fn relation(from: &str, to: &str, pct: f64) -> OwnershipRelation {
    OwnershipRelation {
        id: format!("{from}-{to}"),
        group_id: "g".to_string(),
        from_company_id: from.to_string(),
        to_company_id: to.to_string(),
        ownership_pct: pct,
    }
}

fn holding(company_id: &str, pct: f64) -> ControllerHolding {
    ControllerHolding {
        group_id: "g".to_string(),
        company_id: company_id.to_string(),
        ownership_pct: pct,
    }
}

fn classify(
    companies: &[Company],
    relations: &[OwnershipRelation],
    holdings: &[ControllerHolding],
) -> Vec<chaebol_layout::ClassifiedEdge> {
    let index = OwnershipIndex::build(companies, relations, holdings, "총수");
    let primaries = primary_parents(&index);
    let tree = build_tree(&index, &primaries);
    classify_edges(&index, tree.as_ref())
}

#[test]
fn tree_edges_match_the_resolved_hierarchy() {
    let companies = vec![controller("ctrl"), company("a"), company("b")];
    let relations = vec![
        relation("a", "b", 60.0),
        // The weaker reverse stake closes a cycle and stays off the tree.
        relation("b", "a", 10.0),
    ];
    let holdings = vec![holding("a", 40.0)];

    let edges = classify(&companies, &relations, &holdings);
    assert_eq!(edges.len(), 3);

    let forward = &edges[0];
    assert!(forward.tree_edge);
    assert!(!forward.controller_edge);

    let reverse = &edges[1];
    assert_eq!(reverse.source, "b");
    assert!(!reverse.tree_edge);

    let direct = &edges[2];
    assert_eq!(direct.source, "ctrl");
    assert!(direct.tree_edge);
    assert!(direct.controller_edge);
}

#[test]
fn losing_claims_on_a_shared_target_are_non_tree() {
    let companies = vec![controller("ctrl"), company("a"), company("b"), company("c")];
    let relations = vec![
        relation("a", "c", 50.0),
        relation("b", "c", 50.0),
    ];
    let holdings = vec![holding("a", 30.0), holding("b", 30.0)];

    let edges = classify(&companies, &relations, &holdings);

    // Equal percentages: the first-seen claim carried the tree.
    assert!(edges[0].tree_edge);
    assert!(!edges[1].tree_edge);
}

#[test]
fn duplicate_pairs_classify_identically() {
    let companies = vec![controller("ctrl"), company("a"), company("b")];
    let relations = vec![relation("a", "b", 30.0), relation("a", "b", 10.0)];
    let holdings = vec![holding("a", 20.0)];

    let edges = classify(&companies, &relations, &holdings);
    assert_eq!(edges.len(), 3);
    assert!(edges[0].tree_edge);
    assert!(edges[1].tree_edge);
}

#[test]
fn without_a_root_every_edge_is_non_tree() {
    let companies = vec![company("a"), company("b")];
    let relations = vec![relation("a", "b", 60.0)];

    let edges = classify(&companies, &relations, &[]);
    assert_eq!(edges.len(), 1);
    assert!(!edges[0].tree_edge);
}

#[test]
fn classification_is_deterministic() {
    let companies = vec![
        controller("ctrl"),
        company("a"),
        company("b"),
        company("c"),
    ];
    let relations = vec![
        relation("a", "b", 50.0),
        relation("c", "b", 50.0),
        relation("b", "c", 35.0),
        relation("c", "a", 35.0),
    ];
    let holdings = vec![holding("a", 25.0), holding("c", 25.0)];

    let first = classify(&companies, &relations, &holdings);
    let second = classify(&companies, &relations, &holdings);
    assert_eq!(first, second);
}
