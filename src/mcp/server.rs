/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads JSON-RPC requests from stdin
/// 2. Processes tool calls against the habit store
/// 3. Sends JSON-RPC responses to stdout

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::mcp::protocol::*;
use crate::tools;
use crate::{HabitBoardServer, ServerError};

/// MCP server that handles communication with clients
pub struct McpServer {
    /// The underlying habit board server
    habit_board: HabitBoardServer,
    /// Whether the client finished the initialize handshake
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(habit_board: HabitBoardServer) -> Self {
        Self {
            habit_board,
            initialized: false,
        }
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
                    if let Some(response) = self.process_line(&line) {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
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
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        Some(self.handle_request(request))
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(request.id, json!(null))
            }
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request),
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: ServerInfo {
                name: "Habit Board MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::error(
                request.id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
                None,
            ),
        }
    }

    /// Handle tools/list request
    fn handle_tools_list(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tools = vec![
            ToolDefinition {
                name: "habit_create".to_string(),
                description: "Create a new daily habit to track".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": {"type": "string", "description": "Name of the habit"},
                        "category": {"type": "string", "description": "Category: health, work, or personal"},
                        "difficulty": {"type": "string", "description": "Difficulty: easy, medium, or hard (optional, defaults to medium)"}
                    },
                    "required": ["name", "category"]
                }),
            },
            ToolDefinition {
                name: "habit_toggle".to_string(),
                description: "Toggle today's completion of a habit on or off".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "habit_id": {"type": "string", "description": "ID of the habit to toggle"}
                    },
                    "required": ["habit_id"]
                }),
            },
            ToolDefinition {
                name: "habit_delete".to_string(),
                description: "Delete a habit and its completion history".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "habit_id": {"type": "string", "description": "ID of the habit to delete"}
                    },
                    "required": ["habit_id"]
                }),
            },
            ToolDefinition {
                name: "habit_list".to_string(),
                description: "List habits with streaks and weekly/monthly progress".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "category": {"type": "string", "description": "Filter by category: health, work, or personal (optional)"}
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "habit_status".to_string(),
                description: "Check streak and progress for one habit or all habits".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "habit_id": {"type": "string", "description": "ID of specific habit (optional - shows all if omitted)"}
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "habit_analytics".to_string(),
                description: "Activity heat map, category performance, and overall stats".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "window_days": {"type": "number", "description": "Heat-map window in days (optional, defaults to 84)"}
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "habit_export".to_string(),
                description: "Export all habits and completions as JSON".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            },
        ];

        JsonRpcResponse::success(request.id, json!({"tools": tools}))
    }

    /// Handle tools/call request
    fn handle_tools_call(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match request.params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        request.id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        let args = &tool_params.arguments;
        let storage = self.habit_board.storage();

        let result = match tool_params.name.as_str() {
            "habit_create" => {
                let params = tools::CreateHabitParams {
                    name: str_arg(args, "name"),
                    category: str_arg(args, "category"),
                    difficulty: opt_str_arg(args, "difficulty"),
                };
                match tools::create_habit(storage, params) {
                    Ok(response) => {
                        let message = match &response.habit_id {
                            Some(habit_id) => format!("{}\nHabit ID: {}", response.message, habit_id),
                            None => response.message,
                        };
                        ToolCallResult::success(message)
                    }
                    Err(e) => ToolCallResult::error(e.to_string()),
                }
            }
            "habit_toggle" => {
                let params = tools::ToggleHabitParams { habit_id: str_arg(args, "habit_id") };
                match tools::toggle_habit(storage, params) {
                    Ok(response) => ToolCallResult::success(response.message),
                    Err(e) => ToolCallResult::error(e.to_string()),
                }
            }
            "habit_delete" => {
                let params = tools::DeleteHabitParams { habit_id: str_arg(args, "habit_id") };
                match tools::delete_habit(storage, params) {
                    Ok(response) => ToolCallResult::success(response.message),
                    Err(e) => ToolCallResult::error(e.to_string()),
                }
            }
            "habit_list" => {
                let params = tools::ListHabitsParams { category: opt_str_arg(args, "category") };
                match tools::list_habits(storage, params) {
                    Ok(response) => ToolCallResult::success(render_habit_list(&response)),
                    Err(e) => ToolCallResult::error(e.to_string()),
                }
            }
            "habit_status" => {
                let params = tools::StatusParams { habit_id: opt_str_arg(args, "habit_id") };
                match tools::get_habit_status(storage, params) {
                    Ok(response) => ToolCallResult::success(response.message),
                    Err(e) => ToolCallResult::error(e.to_string()),
                }
            }
            "habit_analytics" => {
                let params = tools::AnalyticsParams {
                    window_days: args
                        .get("window_days")
                        .and_then(|v| v.as_u64())
                        .map(|n| n as u32),
                };
                match tools::get_analytics(storage, params) {
                    Ok(response) => ToolCallResult::success(response.message),
                    Err(e) => ToolCallResult::error(e.to_string()),
                }
            }
            "habit_export" => match tools::export_habits(storage) {
                Ok(response) => ToolCallResult::success(response.message),
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            _ => ToolCallResult::error(format!("Unknown tool: {}", tool_params.name)),
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::error(
                request.id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
                None,
            ),
        }
    }
}

/// Extract a required string argument, empty when missing
fn str_arg(args: &std::collections::HashMap<String, Value>, key: &str) -> String {
    args.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Extract an optional string argument
fn opt_str_arg(args: &std::collections::HashMap<String, Value>, key: &str) -> Option<String> {
    args.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// Render the habit list response as human-readable text
fn render_habit_list(response: &tools::ListHabitsResponse) -> String {
    if response.habits.is_empty() {
        return "No habits found. Create your first habit to get started!".to_string();
    }

    let detailed_list = response
        .habits
        .iter()
        .map(|h| {
            format!(
                "🎯 {} ({} / {}){}\n   🔥 Streak: {} days | Week: {}/7 | Month: {} | Total: {}",
                h.name,
                h.category,
                h.difficulty,
                if h.completed_today { " ✅" } else { "" },
                h.current_streak,
                h.weekly_progress,
                h.monthly_progress,
                h.total_completions,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "📋 Habit Summary ({} habits)\n\n{}\n\n📊 Completed today: {} | Active streaks: {}",
        response.summary.total_habits,
        detailed_list,
        response.summary.completed_today,
        response.summary.active_streaks,
    )
}
