/// MCP (Model Context Protocol) message structures and JSON-RPC handling
///
/// This module defines the JSON-RPC message format that MCP clients use to
/// talk to the productivity hub.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::storage::StorageError;
use crate::tools::{ToolError, ToolResponse};

/// MCP protocol version we support
pub const MCP_VERSION: &str = "2024-11-05";

/// JSON-RPC 2.0 request message
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (always "2.0")
    #[allow(dead_code)]
    pub jsonrpc: String,
    /// Request identifier; absent on notifications
    #[serde(default)]
    pub id: Value,
    /// The method to call (e.g., "tools/call")
    pub method: String,
    /// Parameters for the method call
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 response message
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Request ID that we're responding to
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error information
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Parameters of a `tools/call` request
#[derive(Debug, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to call (e.g., "habit_toggle")
    pub name: String,
    /// Arguments, deserialized into the tool's parameter type
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

/// Result of a `tools/call` request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub content: Vec<ToolContent>,
    /// The full response, or the error code for failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,
    pub is_error: bool,
}

/// Content returned by a tool
#[derive(Debug, Serialize)]
pub struct ToolContent {
    /// Type of content (always "text")
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

/// One entry of the `tools/list` response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema for the tool's input parameters
    pub input_schema: Value,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCapability {
    pub list_changed: bool,
}

/// MCP initialization response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

// JSON-RPC error codes
pub mod error_codes {
    /// Invalid JSON was received by the server
    pub const PARSE_ERROR: i32 = -32700;
    /// The method doesn't exist
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Method exists but parameters are wrong
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    // Application-specific codes, -32000 to -32099
    /// The referenced record doesn't exist
    pub const RECORD_NOT_FOUND: i32 = -32001;
    /// Input validation failed
    pub const VALIDATION_ERROR: i32 = -32003;
    /// Database or storage operation failed
    pub const STORAGE_ERROR: i32 = -32004;
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i32, message: String, data: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError { code, message, data }),
        }
    }
}

impl ToolCallResult {
    fn text(text: String) -> Vec<ToolContent> {
        vec![ToolContent {
            content_type: "text".to_string(),
            text,
        }]
    }

    /// Successful result: the message as text plus the serialized response
    pub fn success<R: ToolResponse>(response: &R) -> Self {
        Self {
            content: Self::text(response.message().to_string()),
            structured_content: serde_json::to_value(response).ok(),
            is_error: false,
        }
    }

    /// Failed tool call
    pub fn error(error_message: String, code: i32) -> Self {
        Self {
            content: Self::text(format!("Error: {}", error_message)),
            structured_content: Some(json!({ "code": code })),
            is_error: true,
        }
    }

    pub fn from_tool_error(error: &ToolError) -> Self {
        Self::error(error.to_string(), tool_error_to_json_rpc_code(error))
    }
}

/// Map storage errors to JSON-RPC error codes
pub fn storage_error_to_json_rpc_code(error: &StorageError) -> i32 {
    match error {
        StorageError::Query(_) => error_codes::STORAGE_ERROR,
        StorageError::Connection(_) => error_codes::STORAGE_ERROR,
        StorageError::Serialization(_) => error_codes::INTERNAL_ERROR,
        StorageError::Migration(_) => error_codes::STORAGE_ERROR,
    }
}

/// Map tool errors to JSON-RPC error codes
pub fn tool_error_to_json_rpc_code(error: &ToolError) -> i32 {
    match error {
        ToolError::Domain(_) | ToolError::InvalidId { .. } => error_codes::VALIDATION_ERROR,
        ToolError::NotFound { .. } => error_codes::RECORD_NOT_FOUND,
        ToolError::Storage(e) => storage_error_to_json_rpc_code(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_error_codes() {
        let not_found = ToolError::NotFound { kind: "Task", id: "x".to_string() };
        assert_eq!(tool_error_to_json_rpc_code(&not_found), error_codes::RECORD_NOT_FOUND);

        let invalid = ToolError::Domain(DomainError::InvalidDate("nope".to_string()));
        assert_eq!(tool_error_to_json_rpc_code(&invalid), error_codes::VALIDATION_ERROR);

        let storage = ToolError::Storage(StorageError::Connection("gone".to_string()));
        assert_eq!(tool_error_to_json_rpc_code(&storage), error_codes::STORAGE_ERROR);
    }

    #[test]
    fn test_tool_result_shape() {
        let result = ToolCallResult::error("Task not found: x".to_string(), error_codes::RECORD_NOT_FOUND);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["isError"], json!(true));
        assert_eq!(value["content"][0]["type"], json!("text"));
        assert_eq!(value["content"][0]["text"], json!("Error: Task not found: x"));
        assert_eq!(value["structuredContent"]["code"], json!(-32001));
    }

    #[test]
    fn test_request_without_id() {
        let request: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).unwrap();
        assert_eq!(request.id, Value::Null);
        assert!(request.params.is_none());
    }
}
