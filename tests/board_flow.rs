//! Integration tests for workspaces, boards, default lists, and card
//! ordering.

mod common;

use http::StatusCode;
use serde_json::Value;

/// Registers a user and creates workspace + board, returning
/// `(token, board detail json)`.
async fn setup_board(app: &common::TestApp) -> (String, Value) {
    let token = app
        .register("alice@example.com", "pw123456", "Alice")
        .await;

    let workspace = app
        .request(
            "POST",
            "/api/workspaces",
            Some(serde_json::json!({ "name": "W1" })),
            Some(&token),
        )
        .await;
    assert_eq!(workspace.status, StatusCode::OK);
    let workspace_id = workspace.body["workspace"]["id"]
        .as_str()
        .expect("workspace id")
        .to_string();

    let board = app
        .request(
            "POST",
            "/api/boards",
            Some(serde_json::json!({
                "workspace_id": workspace_id,
                "name": "B1",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(board.status, StatusCode::OK);
    let board_id = board.body["board"]["id"].as_str().expect("board id");

    let detail = app
        .request(
            "GET",
            &format!("/api/boards/{board_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(detail.status, StatusCode::OK);

    (token, detail.body)
}

fn list_by_name<'a>(detail: &'a Value, name: &str) -> &'a Value {
    detail["lists"]
        .as_array()
        .expect("lists array")
        .iter()
        .find(|l| l["name"] == name)
        .unwrap_or_else(|| panic!("list {name} not found"))
}

#[tokio::test]
async fn test_board_created_with_default_lists() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let (_token, detail) = setup_board(&app).await;

    let lists = detail["lists"].as_array().expect("lists array");
    assert_eq!(lists.len(), 3);

    let expected = [("To Do", 0), ("In Progress", 1), ("Done", 2)];
    for (list, (name, position)) in lists.iter().zip(expected) {
        assert_eq!(list["name"], name);
        assert_eq!(list["position"], position);
        assert_eq!(list["cards"], serde_json::json!([]));
    }

    // The creator is a board member with the admin role.
    let members = detail["members"].as_array().expect("members array");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["email"], "alice@example.com");
    assert_eq!(members[0]["role"], "admin");

    assert_eq!(detail["board"]["background_color"], "#0079BF");
}

#[tokio::test]
async fn test_workspace_access_denied_for_non_member() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let (_alice, detail) = setup_board(&app).await;
    let board_id = detail["board"]["id"].as_str().expect("board id");
    let workspace_id = detail["board"]["workspace_id"]
        .as_str()
        .expect("workspace id");

    let intruder = app.register("eve@example.com", "pw123456", "Eve").await;

    let boards = app
        .request(
            "GET",
            &format!("/api/workspaces/{workspace_id}/boards"),
            None,
            Some(&intruder),
        )
        .await;
    assert_eq!(boards.status, StatusCode::FORBIDDEN);

    let board = app
        .request(
            "GET",
            &format!("/api/boards/{board_id}"),
            None,
            Some(&intruder),
        )
        .await;
    assert_eq!(board.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_cards_append_in_order() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let (token, detail) = setup_board(&app).await;
    let todo_id = list_by_name(&detail, "To Do")["id"]
        .as_str()
        .expect("list id")
        .to_string();
    let board_id = detail["board"]["id"].as_str().expect("board id");

    for title in ["first", "second", "third"] {
        let response = app
            .request(
                "POST",
                &format!("/api/lists/{todo_id}/cards"),
                Some(serde_json::json!({ "title": title })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let detail = app
        .request(
            "GET",
            &format!("/api/boards/{board_id}"),
            None,
            Some(&token),
        )
        .await;
    let cards = list_by_name(&detail.body, "To Do")["cards"]
        .as_array()
        .expect("cards array")
        .clone();

    let titles: Vec<&str> = cards.iter().filter_map(|c| c["title"].as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
    let positions: Vec<i64> = cards.iter().filter_map(|c| c["position"].as_i64()).collect();
    assert_eq!(positions, [0, 1, 2]);
}

#[tokio::test]
async fn test_move_card_across_lists() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let (token, detail) = setup_board(&app).await;
    let board_id = detail["board"]["id"].as_str().expect("board id").to_string();
    let todo_id = list_by_name(&detail, "To Do")["id"]
        .as_str()
        .expect("list id")
        .to_string();
    let done_id = list_by_name(&detail, "Done")["id"]
        .as_str()
        .expect("list id")
        .to_string();

    let mut card_ids = Vec::new();
    for title in ["a", "b", "c"] {
        let response = app
            .request(
                "POST",
                &format!("/api/lists/{todo_id}/cards"),
                Some(serde_json::json!({ "title": title })),
                Some(&token),
            )
            .await;
        card_ids.push(response.body["card"]["id"].as_str().expect("card id").to_string());
    }

    // Move "a" to Done at an out-of-range position: it clamps to the end
    // (index 0 in an empty list) and the source list closes the gap.
    let moved = app
        .request(
            "PUT",
            &format!("/api/cards/{}/move", card_ids[0]),
            Some(serde_json::json!({ "list_id": done_id, "position": 99 })),
            Some(&token),
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.body["card"]["position"], 0);
    assert_eq!(moved.body["card"]["list_id"], done_id.as_str());

    let detail = app
        .request(
            "GET",
            &format!("/api/boards/{board_id}"),
            None,
            Some(&token),
        )
        .await;

    let todo_cards = list_by_name(&detail.body, "To Do")["cards"]
        .as_array()
        .expect("cards")
        .clone();
    let titles: Vec<&str> = todo_cards.iter().filter_map(|c| c["title"].as_str()).collect();
    assert_eq!(titles, ["b", "c"]);
    let positions: Vec<i64> = todo_cards
        .iter()
        .filter_map(|c| c["position"].as_i64())
        .collect();
    assert_eq!(positions, [0, 1]);

    let done_cards = list_by_name(&detail.body, "Done")["cards"]
        .as_array()
        .expect("cards")
        .clone();
    assert_eq!(done_cards.len(), 1);
    assert_eq!(done_cards[0]["title"], "a");
}

#[tokio::test]
async fn test_partial_card_update() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let (token, detail) = setup_board(&app).await;
    let todo_id = list_by_name(&detail, "To Do")["id"]
        .as_str()
        .expect("list id")
        .to_string();

    let created = app
        .request(
            "POST",
            &format!("/api/lists/{todo_id}/cards"),
            Some(serde_json::json!({
                "title": "write tests",
                "description": "the plan",
            })),
            Some(&token),
        )
        .await;
    let card_id = created.body["card"]["id"].as_str().expect("card id");

    let updated = app
        .request(
            "PUT",
            &format!("/api/cards/{card_id}"),
            Some(serde_json::json!({ "is_completed": true })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    // Absent fields are untouched.
    assert_eq!(updated.body["card"]["title"], "write tests");
    assert_eq!(updated.body["card"]["description"], "the plan");
    assert_eq!(updated.body["card"]["is_completed"], true);
}
