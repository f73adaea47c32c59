/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads JSON-RPC requests from stdin
/// 2. Routes tool calls to the productivity tools
/// 3. Sends JSON-RPC responses to stdout

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::mcp::protocol::*;
use crate::storage::{KeyValueStore, Repository};
use crate::tools::{self, ToolError, ToolResponse};
use crate::{ProductivityHub, ServerError};

/// MCP server that owns the hub and answers one request per line
pub struct McpServer<S: KeyValueStore> {
    hub: ProductivityHub<S>,
    /// Whether the client has finished initialization
    initialized: bool,
}

impl<S: KeyValueStore> McpServer<S> {
    pub fn new(hub: ProductivityHub<S>) -> Self {
        Self {
            hub,
            initialized: false,
        }
    }

    pub fn hub(&self) -> &ProductivityHub<S> {
        &self.hub
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line).await {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    return Err(e.into());
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    ///
    /// Returns `None` for blank lines and notifications.
    pub async fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        self.handle_request(request).await
    }

    async fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.method == "initialized" || request.method == "notifications/initialized" {
            self.initialized = true;
            if request.id.is_null() {
                return None;
            }
            return Some(JsonRpcResponse::success(request.id, Value::Null));
        }
        if request.method.starts_with("notifications/") {
            debug!("Ignoring notification {}", request.method);
            return None;
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "tools/list" => JsonRpcResponse::success(request.id, json!({ "tools": tool_definitions() })),
            "tools/call" => self.handle_tools_call(request),
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        };
        Some(response)
    }

    fn handle_initialize(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: ServerInfo {
                name: "Productivity Hub MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        to_response(request.id, &result)
    }

    fn handle_tools_call(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match request.params.map(serde_json::from_value::<ToolCallParams>) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid parameters: {}", e),
                    None,
                );
            }
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        let today = self.hub.today();
        let args = tool_params.arguments;
        debug!("Calling tool {} for {}", tool_params.name, today);

        let outcome = match tool_params.name.as_str() {
            "habit_create" => self.run_tool(args, tools::create_habit),
            "habit_toggle" => self.run_tool(args, |repo, p| tools::toggle_habit(repo, p, today)),
            "habit_list" => self.run_tool(args, |repo, p| tools::list_habits(repo, p, today)),
            "habit_delete" => self.run_tool(args, tools::delete_habit),
            "task_add" => self.run_tool(args, tools::add_task),
            "task_toggle" => self.run_tool(args, tools::toggle_task),
            "task_delete" => self.run_tool(args, tools::delete_task),
            "task_list" => self.run_tool(args, tools::list_tasks),
            "note_create" => self.run_tool(args, tools::create_note),
            "note_update" => self.run_tool(args, tools::update_note),
            "note_get" => self.run_tool(args, tools::get_note),
            "note_delete" => self.run_tool(args, tools::delete_note),
            "note_list" => self.run_tool(args, tools::list_notes),
            "diary_save" => self.run_tool(args, |repo, p| tools::save_diary(repo, p, today)),
            "diary_delete" => self.run_tool(args, tools::delete_diary),
            "diary_list" => self.run_tool(args, |repo, p| tools::list_diary(repo, p, today)),
            "bookmark_add" => self.run_tool(args, tools::add_bookmark),
            "bookmark_delete" => self.run_tool(args, tools::delete_bookmark),
            "bookmark_list" => self.run_tool(args, tools::list_bookmarks),
            "calendar_month" => self.run_tool(args, |repo, p| tools::calendar_month(repo, p, today)),
            "dashboard" => self.run_tool(args, |repo, p| tools::dashboard(repo, p, today)),
            _ => Ok(ToolCallResult::error(
                format!("Unknown tool: {}", tool_params.name),
                error_codes::METHOD_NOT_FOUND,
            )),
        };

        match outcome {
            Ok(result) => to_response(request.id, &result),
            Err(e) => JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_PARAMS,
                format!("Invalid arguments for {}: {}", tool_params.name, e),
                None,
            ),
        }
    }

    /// Deserialize the arguments into `P` and run one tool
    ///
    /// Argument errors come back as `Err`; tool failures become an error
    /// result.
    fn run_tool<P, R, F>(&self, args: Map<String, Value>, tool: F) -> Result<ToolCallResult, serde_json::Error>
    where
        P: DeserializeOwned,
        R: ToolResponse,
        F: FnOnce(&Repository<S>, P) -> Result<R, ToolError>,
    {
        let params: P = serde_json::from_value(Value::Object(args))?;

        Ok(match tool(self.hub.repository(), params) {
            Ok(response) => ToolCallResult::success(&response),
            Err(e) => {
                warn!("Tool call failed: {}", e);
                ToolCallResult::from_tool_error(&e)
            }
        })
    }
}

fn to_response<T: serde::Serialize>(id: Value, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string(), None),
    }
}

fn definition<P: JsonSchema>(name: &str, description: &str) -> ToolDefinition {
    let schema = schemars::schema_for!(P);
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: serde_json::to_value(schema).unwrap_or_else(|_| json!({ "type": "object" })),
    }
}

/// Every tool the server offers, with schemas generated from the parameter types
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        definition::<tools::CreateHabitParams>("habit_create", "Create a new daily habit to track"),
        definition::<tools::ToggleHabitParams>(
            "habit_toggle",
            "Mark a habit done for today, or unmark it if it already is; updates the streak",
        ),
        definition::<tools::ListHabitsParams>(
            "habit_list",
            "List habits with today's status, streaks and the last 7 days",
        ),
        definition::<tools::DeleteHabitParams>("habit_delete", "Delete a habit and its history"),
        definition::<tools::AddTaskParams>("task_add", "Add a task, optionally with a due date"),
        definition::<tools::TaskIdParams>("task_toggle", "Mark a task completed or pending"),
        definition::<tools::TaskIdParams>("task_delete", "Delete a task"),
        definition::<tools::ListTasksParams>("task_list", "List pending and completed tasks"),
        definition::<tools::CreateNoteParams>("note_create", "Create a note"),
        definition::<tools::UpdateNoteParams>("note_update", "Edit a note's title or content"),
        definition::<tools::NoteIdParams>("note_get", "Show the full text of a note"),
        definition::<tools::NoteIdParams>("note_delete", "Delete a note"),
        definition::<tools::ListNotesParams>("note_list", "List notes with a short preview"),
        definition::<tools::SaveDiaryParams>(
            "diary_save",
            "Write the diary entry for a day (today by default); replaces that day's entry",
        ),
        definition::<tools::DiaryEntryIdParams>("diary_delete", "Delete a diary entry"),
        definition::<tools::ListDiaryParams>("diary_list", "List diary entries, newest first"),
        definition::<tools::AddBookmarkParams>("bookmark_add", "Save a link"),
        definition::<tools::DeleteBookmarkParams>("bookmark_delete", "Delete a bookmark"),
        definition::<tools::ListBookmarksParams>("bookmark_list", "List saved links with their domains"),
        definition::<tools::CalendarMonthParams>(
            "calendar_month",
            "Month calendar of due tasks, diary entries and completed habits",
        ),
        definition::<tools::DashboardParams>("dashboard", "Overview of tasks, habits, notes, diary and bookmarks"),
    ]
}
