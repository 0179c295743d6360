mod common;

use serde_json::json;

use blockagent::agent::{AgentFlow, build_execute_request, is_present};
use blockagent::contract;
use blockagent::error::BlockAgentError;
use blockagent::intent::Chain;
use blockagent::session::Session;
use common::FakeBackend;

#[tokio::test]
async fn plan_is_stored_in_session() {
    let backend = FakeBackend::responding(json!({
        "plan": { "tool": "NATIVE_TRANSFER", "to": "0xabc", "amount": "0.01" }
    }));
    let flow = AgentFlow::new(&backend);
    let mut session = Session::new();

    let response = flow
        .plan("send 0.01 to 0xabc on harmony", Some(Chain::Harmony), &mut session)
        .await
        .unwrap();

    assert_eq!(response["plan"]["tool"], "NATIVE_TRANSFER");
    assert_eq!(session.plan_tool(), Some("NATIVE_TRANSFER"));
    assert_eq!(
        backend.calls(),
        vec![("/agent/plan", json!({ "prompt": "send 0.01 to 0xabc on harmony", "chain": "harmony" }))]
    );
}

#[tokio::test]
async fn missing_plan_clears_previous_one() {
    for empty in [json!(null), json!({}), json!([]), json!(""), json!(false), json!(0)] {
        let backend = FakeBackend::responding(json!({ "plan": empty.clone() }));
        let flow = AgentFlow::new(&backend);
        let mut session = Session {
            plan: Some(json!({ "tool": "DEPLOY_CONTRACT" })),
            ..Session::new()
        };

        flow.plan("do something", None, &mut session).await.unwrap();
        assert_eq!(session.plan, None, "plan {empty} should not be kept");

        let err = flow.execute(true, None, &mut session).await.unwrap_err();
        assert!(matches!(err, BlockAgentError::NoPlan));
        assert_eq!(backend.calls().len(), 1, "only /agent/plan should be called for {empty}");
    }
}

#[test]
fn plan_presence() {
    assert!(is_present(&json!({ "tool": "CONTRACT_CALL" })));
    assert!(is_present(&json!(["step"])));
    assert!(is_present(&json!("transfer")));
    assert!(is_present(&json!(true)));
    assert!(is_present(&json!(0.5)));
    assert!(!is_present(&json!(0.0)));
}

#[tokio::test]
async fn blank_prompt_is_sent_as_given() {
    let backend = FakeBackend::responding(json!({ "plan": null }));
    let flow = AgentFlow::new(&backend);

    flow.plan("   ", None, &mut Session::new()).await.unwrap();

    assert_eq!(backend.calls(), vec![("/agent/plan", json!({ "prompt": "   ", "chain": null }))]);
}

#[tokio::test]
async fn execute_without_plan_fails() {
    let backend = FakeBackend::new();
    let flow = AgentFlow::new(&backend);

    let err = flow.execute(true, None, &mut Session::new()).await.unwrap_err();

    assert!(matches!(err, BlockAgentError::NoPlan));
    assert!(backend.calls().is_empty());
}

#[test]
fn deploy_plan_carries_artifacts() {
    let session = Session {
        plan: Some(json!({ "tool": "DEPLOY_CONTRACT" })),
        storage_addr: Some("0xignored".to_string()),
    };

    let request = build_execute_request(&session, false, None).unwrap();

    assert_eq!(request.abi, Some(contract::simple_storage_abi()));
    assert_eq!(request.bytecode.as_deref(), Some(contract::SIMPLE_STORAGE_BYTECODE));
    assert_eq!(request.address, None);
    assert!(!request.approve);
}

#[test]
fn contract_call_plan_carries_address() {
    let session = Session {
        plan: Some(json!({ "tool": "CONTRACT_CALL", "method": "get" })),
        storage_addr: Some("0xstored".to_string()),
    };

    let from_session = build_execute_request(&session, true, None).unwrap();
    let explicit = build_execute_request(&session, true, Some("0xexplicit")).unwrap();

    assert_eq!(from_session.address.as_deref(), Some("0xstored"));
    assert_eq!(explicit.address.as_deref(), Some("0xexplicit"));
    assert_eq!(explicit.abi, None);
}

#[test]
fn other_tools_send_plan_only() {
    let session = Session {
        plan: Some(json!({ "tool": "NATIVE_TRANSFER" })),
        storage_addr: Some("0xstored".to_string()),
    };

    let request = build_execute_request(&session, true, None).unwrap();

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "plan": { "tool": "NATIVE_TRANSFER" }, "approve": true })
    );
}

#[tokio::test]
async fn executed_deployment_address_is_captured() {
    let backend = FakeBackend::responding(json!({
        "simulation": { "ok": true },
        "result": { "address": "0xnewcontract", "txHash": "0xtx" }
    }));
    let flow = AgentFlow::new(&backend);
    let mut session = Session {
        plan: Some(json!({ "tool": "DEPLOY_CONTRACT" })),
        ..Session::new()
    };

    flow.execute(true, None, &mut session).await.unwrap();

    assert_eq!(session.storage_addr.as_deref(), Some("0xnewcontract"));
    let calls = backend.calls();
    let (endpoint, payload) = &calls[0];
    assert_eq!(*endpoint, "/agent/execute");
    assert_eq!(payload["approve"], true);
    assert_eq!(payload["bytecode"], contract::SIMPLE_STORAGE_BYTECODE);
}

#[test]
fn simulation_without_result_keeps_address() {
    let backend = FakeBackend::responding(json!({ "simulation": { "ok": true }, "result": "simulated only" }));
    let flow = AgentFlow::new(&backend);
    let mut session = Session {
        plan: Some(json!({ "tool": "CONTRACT_CALL" })),
        storage_addr: Some("0xkeep".to_string()),
    };

    tokio_test::block_on(flow.execute(false, None, &mut session)).unwrap();

    assert_eq!(session.storage_addr.as_deref(), Some("0xkeep"));
}
