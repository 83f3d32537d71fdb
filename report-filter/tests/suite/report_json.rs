use pretty_assertions::assert_eq;
use report_filter::FilterConfig;
use report_filter::NodeKey;
use report_filter::StatusType;
use report_filter::TestCase;
use report_filter::filtrate;

const REPORT: &str = r#"{
  "id": "tc-17",
  "name": "New order is rejected",
  "status": { "status": "FAILED" },
  "actions": [
    {
      "id": 1,
      "name": "Send NewOrderSingle",
      "serviceName": "fix-client",
      "status": { "status": "PASSED" },
      "parameters": [
        { "name": "Side", "value": "BUY" },
        {
          "name": "Instrument",
          "subParameters": [{ "name": "Symbol", "value": "EUR/USD" }]
        }
      ],
      "subNodes": [
        {
          "actionNodeType": "verification",
          "id": 2,
          "name": "Check ExecutionReport",
          "messageId": 5,
          "status": { "status": "FAILED", "description": "OrdStatus mismatch" },
          "entries": [
            {
              "name": "OrdStatus",
              "expected": "NEW",
              "actual": "REJECTED",
              "status": "FAILED"
            }
          ]
        },
        {
          "actionNodeType": "action",
          "id": 3,
          "name": "Wait for report",
          "serviceName": "fix-server"
        }
      ]
    },
    { "id": 4, "name": "Cleanup" }
  ],
  "messages": [
    { "id": 5, "msgName": "ExecutionReport", "from": "fix-server", "to": "fix-client" },
    { "id": 6, "msgName": "Heartbeat", "from": "fix-server", "to": "monitor" }
  ]
}"#;

fn report() -> TestCase {
    serde_json::from_str(REPORT).expect("report json")
}

fn config(json: &str) -> FilterConfig {
    serde_json::from_str(json).expect("config json")
}

#[test]
fn report_loads_nested_nodes() {
    let test_case = report();

    assert_eq!(test_case.actions.len(), 2);
    assert_eq!(test_case.actions[0].sub_nodes.len(), 2);
    assert_eq!(test_case.messages[1].msg_name, "Heartbeat");
    assert_eq!(
        test_case.status.map(|status| status.status),
        Some(StatusType::Failed)
    );
}

#[test]
fn failed_verifications_from_json_config() {
    let config = config(
        r#"{ "types": ["verification"], "blocks": [{ "path": "status", "values": ["FAILED"] }] }"#,
    );

    let results = filtrate(&report(), &config).expect("filtrate");

    assert_eq!(
        results.into_keys(),
        vec![NodeKey::action(1), NodeKey::verification(1, 2)]
    );
}

#[test]
fn service_block_reaches_actions_and_messages() {
    let config = config(r#"{ "blocks": [{ "path": "service", "values": ["fix-server"] }] }"#);

    let results = filtrate(&report(), &config).expect("filtrate");

    assert_eq!(results.to_strings(), vec!["action-1", "action-3", "msg-5", "msg-6"]);
}

#[test]
fn all_block_reads_parameters_and_entries() {
    let config = config(
        r#"{ "types": ["action", "verification"], "blocks": [{ "path": "all", "values": ["eur/usd", "rejected"] }] }"#,
    );

    let results = filtrate(&report(), &config).expect("filtrate");

    assert_eq!(results.to_strings(), vec!["action-1", "action-1-verification-2"]);
}

#[test]
fn empty_config_keeps_everything() {
    let results = filtrate(&report(), &config("{}")).expect("filtrate");

    assert_eq!(
        results.to_strings(),
        vec![
            "action-1",
            "action-1-verification-2",
            "action-3",
            "action-4",
            "msg-5",
            "msg-6",
        ]
    );
}

#[test]
fn results_serialize_as_key_array() {
    let config = config(r#"{ "types": ["message"], "blocks": [{ "path": "all", "values": ["heartbeat"] }] }"#);

    let results = filtrate(&report(), &config).expect("filtrate");
    let json = serde_json::to_value(&results).expect("serialize");

    assert_eq!(json, serde_json::json!(["msg-6"]));
}

#[test]
fn unknown_status_in_config_is_an_error() {
    let config = config(r#"{ "blocks": [{ "path": "status", "values": ["GREEN"] }] }"#);

    let err = filtrate(&report(), &config).expect_err("GREEN is not a status");

    assert_eq!(err.to_string(), "unknown status 'GREEN'");
}
