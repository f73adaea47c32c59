/// A full MCP session driven line by line
use productivity_hub_mcp::mcp::McpServer;
use productivity_hub_mcp::domain::dates::parse_day;
use productivity_hub_mcp::*;
use serde_json::{json, Value};

struct Session {
    server: McpServer<MemoryStore>,
    next_id: u64,
}

impl Session {
    fn new(today: &str) -> Self {
        let hub = ProductivityHub::with_store(MemoryStore::new()).with_today(parse_day(today).unwrap());
        Self { server: McpServer::new(hub), next_id: 1 }
    }

    async fn request(&mut self, method: &str, params: Value) -> Value {
        let id = self.next_id;
        self.next_id += 1;
        let line = json!({ "jsonrpc": "2.0", "id": id, "method": method, "params": params }).to_string();
        let response = self.server.process_line(&line).await.expect("expected a response");
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["id"], json!(id));
        value
    }

    async fn tool(&mut self, name: &str, arguments: Value) -> Value {
        let response = self
            .request("tools/call", json!({ "name": name, "arguments": arguments }))
            .await;
        response["result"].clone()
    }
}

#[tokio::test]
async fn test_tools_list_names() {
    let mut session = Session::new("2024-01-10");
    let response = session.request("tools/list", json!({})).await;

    let names: Vec<&str> = response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    for expected in ["habit_toggle", "task_add", "note_get", "diary_save", "bookmark_list", "calendar_month", "dashboard"] {
        assert!(names.contains(&expected), "missing {}", expected);
    }
    assert!(response["result"]["tools"][0]["inputSchema"].is_object());
}

#[tokio::test]
async fn test_habit_streak_session() {
    let mut session = Session::new("2024-01-10");

    let created = session.tool("habit_create", json!({ "name": "Meditate" })).await;
    let habit_id = created["structuredContent"]["habit_id"].as_str().unwrap().to_string();

    let marked = session.tool("habit_toggle", json!({ "habit_id": habit_id })).await;
    assert_eq!(marked["structuredContent"]["current_streak"], json!(1));
    assert_eq!(marked["structuredContent"]["longest_streak"], json!(1));

    let listed = session.tool("habit_list", json!({})).await;
    let habit = &listed["structuredContent"]["habits"][0];
    assert_eq!(habit["completed_today"], json!(true));
    assert_eq!(habit["last_7_days"].as_array().unwrap().len(), 7);
    assert_eq!(habit["last_7_days"][6]["isToday"], json!(true));

    let unmarked = session.tool("habit_toggle", json!({ "habit_id": habit_id })).await;
    assert_eq!(unmarked["structuredContent"]["current_streak"], json!(0));
    assert_eq!(unmarked["structuredContent"]["longest_streak"], json!(1));
}

#[tokio::test]
async fn test_productivity_session() {
    let mut session = Session::new("2024-05-20");

    let task = session.tool("task_add", json!({ "title": "Book flights", "due_date": "2024-05-22" })).await;
    let task_id = task["structuredContent"]["task_id"].as_str().unwrap().to_string();
    session.tool("task_add", json!({ "title": "Water plants" })).await;
    session.tool("task_toggle", json!({ "task_id": task_id })).await;

    let note = session.tool("note_create", json!({ "title": "Packing", "content": "passport\ncharger" })).await;
    let note_id = note["structuredContent"]["note_id"].as_str().unwrap().to_string();
    let fetched = session.tool("note_get", json!({ "note_id": note_id })).await;
    assert!(fetched["content"][0]["text"].as_str().unwrap().contains("passport\ncharger"));

    session.tool("diary_save", json!({ "content": "Planned the trip", "mood": "great" })).await;
    let again = session.tool("diary_save", json!({ "content": "Planned the whole trip" })).await;
    assert_eq!(again["structuredContent"]["created"], json!(false));

    session.tool("bookmark_add", json!({ "title": "Airline", "url": "www.example.com/checkin" })).await;

    let dashboard = session.tool("dashboard", json!({})).await;
    let summary = &dashboard["structuredContent"]["summary"];
    assert_eq!(summary["pendingTasks"], json!(1));
    assert_eq!(summary["noteCount"], json!(1));
    assert_eq!(summary["diaryCount"], json!(1));
    assert_eq!(summary["bookmarkCount"], json!(1));
    assert_eq!(summary["recentTasks"].as_array().unwrap().len(), 2);

    let calendar = session.tool("calendar_month", json!({ "year": 2024, "month": 5 })).await;
    let may_22 = &calendar["structuredContent"]["grid"]["days"][21];
    assert_eq!(may_22["events"][0]["title"], json!("Book flights"));
    assert_eq!(may_22["events"][0]["kind"], json!("task"));
}

#[test]
fn test_validation_errors_are_tool_results() {
    tokio_test::block_on(async {
        let mut session = Session::new("2024-05-20");

        let bad_date = session.tool("task_add", json!({ "title": "x", "due_date": "tomorrow" })).await;
        assert_eq!(bad_date["isError"], json!(true));
        assert_eq!(bad_date["structuredContent"]["code"], json!(-32003));

        let bad_id = session.tool("note_delete", json!({ "note_id": "not-a-uuid" })).await;
        assert_eq!(bad_id["isError"], json!(true));
        assert!(bad_id["content"][0]["text"].as_str().unwrap().contains("Invalid Note ID"));

        let wrong_type = session.request("tools/call", json!({ "name": "calendar_month", "arguments": { "month": "May" } })).await;
        assert_eq!(wrong_type["error"]["code"], json!(-32602));
    });
}
