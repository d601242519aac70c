// crates/portal-core/tests/order_flow_scenarios.rs

use portal_core::{
    format_currency, MarketSnapshot, OrderDraft, OrderRequest, OrderType, Side, SnapshotEnvelope,
};

#[test]
fn limit_buy_draft_through_submission() {
    let mut draft = OrderDraft::new(3);
    draft.side = Side::Buy;
    draft.order_type = OrderType::Limit;
    draft.quantity = "200".to_string();
    draft.price = "12.34".to_string();

    let summary = draft.summary();
    assert_eq!(summary.value, 2468.0);
    assert_eq!(summary.commission, 2.47);
    assert_eq!(summary.total_cost, 2470.47);
    assert_eq!(format_currency(summary.total_cost), "$2,470.47");

    let req = OrderRequest::from_draft(&draft);
    assert_eq!(req.quantity, 200);
    assert_eq!(req.price, 12.34);
    assert_eq!(req.side.as_str(), "buy");
    assert_eq!(req.order_type.as_str(), "limit");
}

#[test]
fn market_sell_drops_the_price() {
    let mut draft = OrderDraft::new(3);
    draft.side = Side::Sell;
    draft.order_type = OrderType::Market;
    draft.quantity = "50".to_string();
    draft.price = "999".to_string(); // hidden field, must not leak

    let req = OrderRequest::from_draft(&draft);
    assert_eq!(req.price, 0.0);
    assert_eq!(req.order_type, OrderType::Market);
}

#[test]
fn summary_holds_for_a_grid_of_inputs() {
    for &(q, p) in &[(0.0, 0.0), (1.0, 0.01), (1000.0, 250.0), (7.0, 3.33)] {
        let buy = portal_core::OrderSummary::derive(Side::Buy, q, p);
        let sell = portal_core::OrderSummary::derive(Side::Sell, q, p);
        assert_eq!(buy.value, q * p);
        assert_eq!(buy.value, sell.value);
        assert_eq!(buy.total_cost, buy.value + buy.commission);
        assert_eq!(sell.total_cost, sell.value - sell.commission);
    }
}

#[test]
fn poll_payload_decodes_like_the_server_sends_it() {
    let raw = r#"{
        "success": true,
        "data": {
            "stats": {
                "volume": {"value": "1,234", "change": 2.5},
                "trades": {"value": "87", "change": 0.0}
            },
            "securities": [
                {"id": 1, "symbol": "ACME", "current_price": 42.5, "change_percent": 1.1},
                {"id": 2, "symbol": "GLBX", "current_price": 9.99, "change_percent": -0.4}
            ]
        }
    }"#;

    let envelope: SnapshotEnvelope = serde_json::from_str(raw).unwrap();
    let snapshot: MarketSnapshot = envelope.into_snapshot().unwrap();

    // Stat order and security order are preserved as sent.
    let keys: Vec<_> = snapshot.stats.keys().cloned().collect();
    assert_eq!(keys, vec!["volume".to_string(), "trades".to_string()]);
    assert_eq!(snapshot.securities[1].symbol, "GLBX");
}
