use chaebol_core::{Company, ControllerHolding, OwnershipRelation};
use chaebol_layout::index::OwnershipIndex;

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

#[test]
fn index_merges_relations_and_holdings_into_one_incoming_view() {
    let companies = vec![controller("ctrl"), company("a"), company("b")];
    let relations = vec![relation("a", "b", 40.0)];
    let holdings = vec![holding("a", 20.0), holding("b", 5.0)];

    let index = OwnershipIndex::build(&companies, &relations, &holdings, "총수");

    assert_eq!(index.root_id(), Some("ctrl"));
    assert_eq!(index.edges().len(), 3);

    let b_claims: Vec<_> = index.incoming("b").collect();
    assert_eq!(b_claims.len(), 2);
    assert_eq!(b_claims[0].source_id, "a");
    assert!(!b_claims[0].from_controller);
    assert_eq!(b_claims[1].source_id, "ctrl");
    assert!(b_claims[1].from_controller);

    let a_claims: Vec<_> = index.incoming("a").collect();
    assert_eq!(a_claims.len(), 1);
    assert_eq!(a_claims[0].pct, 20.0);
}

#[test]
fn index_drops_unknown_self_and_non_positive_records() {
    let companies = vec![controller("ctrl"), company("a"), company("b")];
    let relations = vec![
        relation("a", "missing", 50.0),
        relation("missing", "b", 50.0),
        relation("a", "a", 50.0),
        relation("a", "b", 0.0),
        relation("a", "b", -3.0),
        relation("a", "b", 12.5),
    ];
    let holdings = vec![holding("ghost", 10.0), holding("a", 0.0), holding("ctrl", 5.0)];

    let index = OwnershipIndex::build(&companies, &relations, &holdings, "총수");

    assert_eq!(index.edges().len(), 1);
    assert_eq!(index.edges()[0].pct, 12.5);
    assert_eq!(index.incoming("a").count(), 0);
    assert_eq!(index.incoming("ctrl").count(), 0);
}

#[test]
fn index_keeps_duplicate_pairs_as_separate_claims() {
    let companies = vec![controller("ctrl"), company("a"), company("b")];
    let relations = vec![relation("a", "b", 30.0), relation("a", "b", 10.0)];

    let index = OwnershipIndex::build(&companies, &relations, &[], "총수");

    let claims: Vec<_> = index.incoming("b").collect();
    assert_eq!(claims.len(), 2);
    assert_eq!(claims[0].pct, 30.0);
    assert_eq!(claims[1].pct, 10.0);
}

#[test]
fn index_materializes_a_synthetic_controller_when_holdings_exist() {
    let companies = vec![company("a"), company("b")];
    let holdings = vec![holding("a", 20.0)];

    let index = OwnershipIndex::build(&companies, &[], &holdings, "홍길동");

    assert_eq!(index.companies().len(), 3);
    let root = index.root_id().unwrap();
    let root_company = index.company(root).unwrap();
    assert!(root_company.is_controller);
    assert_eq!(root_company.name, "홍길동");

    let a_claims: Vec<_> = index.incoming("a").collect();
    assert_eq!(a_claims.len(), 1);
    assert_eq!(a_claims[0].source_id, root);
    assert!(a_claims[0].from_controller);
}

#[test]
fn index_does_not_materialize_a_root_without_holdings() {
    let companies = vec![company("a"), company("b")];
    let relations = vec![relation("a", "b", 60.0)];

    let index = OwnershipIndex::build(&companies, &relations, &[], "홍길동");

    assert_eq!(index.root_id(), None);
    assert_eq!(index.companies().len(), 2);
}

#[test]
fn synthetic_controller_id_avoids_collisions() {
    let companies = vec![company("_controller"), company("a")];
    let holdings = vec![holding("a", 10.0)];

    let index = OwnershipIndex::build(&companies, &[], &holdings, "홍길동");

    let root = index.root_id().unwrap();
    assert_eq!(root, "_controller1");
    assert!(index.company("_controller").is_some());
    assert!(!index.company("_controller").unwrap().is_controller);
}
