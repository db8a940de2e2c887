//! Tests for the line-oriented JSON command loop.

use serde_json::Value;
use tictactoe_service::{GameService, ServiceConfig, run};

fn run_lines(service: &GameService, input: &str) -> Vec<Value> {
    let mut out = Vec::new();
    run(service, input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_create_then_move() {
    let service = GameService::in_memory(ServiceConfig::two_player());
    let replies = run_lines(&service, "{\"op\":\"create\",\"playerSide\":\"X\"}\n");
    assert_eq!(replies.len(), 1);
    let id = replies[0]["ok"]["gameId"].as_str().unwrap().to_string();
    assert_eq!(replies[0]["ok"]["status"], "IN_PROGRESS");

    let input = format!(
        "{{\"op\":\"move\",\"gameId\":\"{id}\",\"row\":1,\"col\":1,\"side\":\"X\"}}\n\n\
         {{\"op\":\"move\",\"gameId\":\"{id}\",\"row\":1,\"col\":1,\"side\":\"O\"}}\n\
         {{\"op\":\"get\",\"gameId\":\"{id}\"}}\n"
    );
    let replies = run_lines(&service, &input);
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["ok"]["turn"], "O");
    assert_eq!(replies[0]["ok"]["gameField"][1][1], "X");
    assert_eq!(replies[1]["error"]["code"], "CELL_OCCUPIED");
    assert_eq!(replies[2]["ok"]["gameField"][1][1], "X");
}

#[test]
fn test_garbage_line_gets_error_reply() {
    let service = GameService::in_memory(ServiceConfig::default());
    let replies = run_lines(&service, "not json\n{\"op\":\"dance\"}\n");
    assert_eq!(replies.len(), 2);
    for reply in replies {
        assert_eq!(reply["error"]["code"], "INVALID_REQUEST");
    }
}

#[test]
fn test_get_unknown_game() {
    let service = GameService::in_memory(ServiceConfig::default());
    let replies = run_lines(&service, "{\"op\":\"get\",\"gameId\":\"missing\"}\n");
    assert_eq!(replies[0]["error"]["code"], "NOT_FOUND");
}

#[test]
fn test_coordinate_errors() {
    let service = GameService::in_memory(ServiceConfig::two_player());
    let replies = run_lines(&service, "{\"op\":\"create\",\"playerSide\":\"X\"}\n");
    let id = replies[0]["ok"]["gameId"].as_str().unwrap().to_string();

    let input = format!(
        "{{\"op\":\"move\",\"gameId\":\"{id}\",\"row\":-1,\"col\":0,\"side\":\"X\"}}\n\
         {{\"op\":\"move\",\"gameId\":\"{id}\",\"row\":3,\"col\":0,\"side\":\"X\"}}\n"
    );
    let replies = run_lines(&service, &input);
    assert_eq!(replies[0]["error"]["code"], "INVALID_REQUEST");
    assert_eq!(replies[1]["error"]["code"], "OUT_OF_BOUNDS");
}
