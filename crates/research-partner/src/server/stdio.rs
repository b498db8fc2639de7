//! Stdio transport.
//!
//! Newline-delimited JSON-RPC 2.0 over stdin/stdout. Logs must go to stderr.

use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::protocol::{
    INVALID_PARAMS, JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, ToolDescriptor,
};
use crate::tools::ToolRegistry;

/// Protocol version assumed when the client does not send one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// Serve the registry over the process's stdin/stdout until EOF.
///
/// # Errors
///
/// Returns error on I/O failure.
pub async fn run_stdio(registry: &ToolRegistry) -> anyhow::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    serve(registry, reader, writer).await
}

/// Serve the registry over any line-oriented reader and writer until EOF.
///
/// # Errors
///
/// Returns error on I/O failure.
pub async fn serve<R, W>(registry: &ToolRegistry, mut reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    tracing::info!(tools = registry.len(), "Stdio server ready, waiting for requests");

    loop {
        line.clear();
        let bytes_read = match reader.read_line(&mut line).await {
            Ok(n) => n,
            Err(err) => {
                tracing::error!(error = %err, "Failed to read request");
                return Err(err.into());
            }
        };

        if bytes_read == 0 {
            tracing::info!("Stdin closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(trimmed) {
            Ok(request) => {
                tracing::debug!(method = %request.method, "Received request");
                if request.is_notification() {
                    tracing::debug!(method = %request.method, "Notification, no response");
                    continue;
                }
                handle_request(&request, registry).await
            }
            Err(e) => JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {e}")),
        };

        let response_json = serde_json::to_string(&response)?;
        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

/// Dispatch one request.
pub async fn handle_request(req: &JsonRpcRequest, registry: &ToolRegistry) -> JsonRpcResponse {
    let id = req.id.clone();
    match req.method.as_str() {
        "initialize" => handle_initialize(id, &req.params),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => handle_tools_list(id, registry),
        "tools/call" => handle_tools_call(id, &req.params, registry).await,
        _ => JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {}", req.method)),
    }
}

fn handle_initialize(id: Option<Value>, params: &Value) -> JsonRpcResponse {
    let protocol_version =
        params.get("protocolVersion").and_then(Value::as_str).unwrap_or(DEFAULT_PROTOCOL_VERSION);

    tracing::info!(protocol_version, "Initialize");

    JsonRpcResponse::success(
        id,
        json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(id: Option<Value>, registry: &ToolRegistry) -> JsonRpcResponse {
    let tools: Vec<ToolDescriptor> = registry
        .list()
        .into_iter()
        .map(|info| ToolDescriptor {
            name: info.name.to_string(),
            description: info.description.to_string(),
            input_schema: info.input_schema,
        })
        .collect();

    JsonRpcResponse::success(id, json!({ "tools": tools }))
}

async fn handle_tools_call(
    id: Option<Value>,
    params: &Value,
    registry: &ToolRegistry,
) -> JsonRpcResponse {
    let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing 'name' parameter");
    };

    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    tracing::info!(tool = %tool_name, "Executing tool");

    let Some(envelope) = registry.call(tool_name, arguments).await else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Tool not found: {tool_name}"));
    };

    JsonRpcResponse::success(
        id,
        json!({
            "content": [{
                "type": "text",
                "text": envelope.to_json()
            }],
            "isError": !envelope.success
        }),
    )
}
