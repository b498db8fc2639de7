//! Stdio JSON-RPC server tests.
//!
//! Requests are fed from an in-memory buffer; responses are collected line by
//! line from an in-memory writer.

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_partner::client::ResearchClient;
use research_partner::config::Config;
use research_partner::server::stdio::serve;
use research_partner::tools::{ToolContext, ToolRegistry};

fn registry_for(base_url: &str) -> ToolRegistry {
    let client = ResearchClient::new(&Config::for_testing(base_url)).unwrap();
    ToolRegistry::new(ToolContext::new(Arc::new(client)))
}

/// Feed newline-separated requests and return parsed responses.
async fn exchange(registry: &ToolRegistry, requests: &[Value]) -> Vec<Value> {
    let input: String = requests.iter().map(|r| format!("{r}\n")).collect();
    exchange_raw(registry, &input).await
}

async fn exchange_raw(registry: &ToolRegistry, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    serve(registry, input.as_bytes(), &mut output).await.unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_initialize_echoes_protocol_version() {
    let registry = registry_for("http://127.0.0.1:1");
    let responses = exchange(
        &registry,
        &[json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {"protocolVersion": "2025-03-26"}})],
    )
    .await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "research-partner");
}

#[tokio::test]
async fn test_tools_list_shape() {
    let registry = registry_for("http://127.0.0.1:1");
    let responses =
        exchange(&registry, &[json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})]).await;

    let tools = responses[0]["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 6);

    let search = tools.iter().find(|t| t["name"] == "searchPapers").unwrap();
    assert_eq!(search["inputSchema"]["required"], json!(["query"]));
    assert_eq!(search["inputSchema"]["properties"]["limit"]["default"], 10);

    let author = tools.iter().find(|t| t["name"] == "searchByAuthor").unwrap();
    assert_eq!(author["inputSchema"]["required"], json!(["authorName"]));
}

#[tokio::test]
async fn test_tools_call_wraps_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/datasets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "org/ds"}])))
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server.uri());
    let responses = exchange(
        &registry,
        &[json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {"name": "datasetSearch", "arguments": {"query": "ds"}}
        })],
    )
    .await;

    let result = &responses[0]["result"];
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"][0]["type"], "text");

    let envelope: Value = serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["datasets"][0]["id"], "org/ds");
}

#[tokio::test]
async fn test_tools_call_failed_envelope_sets_is_error() {
    let registry = registry_for("http://127.0.0.1:1");
    let responses = exchange(
        &registry,
        &[json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": {"name": "searchPapers", "arguments": {"query": ""}}
        })],
    )
    .await;

    let result = &responses[0]["result"];
    assert_eq!(result["isError"], true);
    let envelope: Value = serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(envelope["message"], "Invalid input for 'query': cannot be empty");
}

#[tokio::test]
async fn test_protocol_errors() {
    let registry = registry_for("http://127.0.0.1:1");
    let responses = exchange_raw(
        &registry,
        concat!(
            "{not json\n",
            "\n",
            r#"{"jsonrpc":"2.0","id":5,"method":"resources/list"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"nope"}}"#,
            "\n",
        ),
    )
    .await;

    let codes: Vec<_> = responses.iter().map(|r| r["error"]["code"].as_i64().unwrap()).collect();
    assert_eq!(codes, [-32700, -32601, -32602, -32602]);
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(responses[3]["error"]["message"], "Tool not found: nope");
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let registry = registry_for("http://127.0.0.1:1");
    let responses = exchange(
        &registry,
        &[
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 8, "method": "ping"}),
        ],
    )
    .await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 8);
    assert_eq!(responses[0]["result"], json!({}));
}

#[tokio::test]
async fn test_null_id_request_gets_response() {
    let registry = registry_for("http://127.0.0.1:1");
    let responses = exchange(
        &registry,
        &[
            json!({"jsonrpc": "2.0", "id": null, "method": "ping"}),
            json!({"jsonrpc": "2.0", "method": "notifications/cancelled"}),
        ],
    )
    .await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(responses[0]["result"], json!({}));
}
