//! Integration tests for the chat view driven end to end: state transitions,
//! effects executed against a real in-process HTTP backend, results applied in
//! arrival order. No mocks.

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use faq_chat_client::Client;
use faq_chat_tui::effects::{run_effect, spawn_effect};
use faq_chat_tui::state::ANSWER_ERROR_TEXT;
use faq_chat_tui::{ChatEvent, ChatState, Effect, Message};
use serde_json::{json, Value};
use tokio::sync::mpsc;

async fn spawn_backend(router: Router) -> Client {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Client::new(&format!("http://{addr}")).unwrap()
}

/// Backend whose `/ask` delays answers to "slow" questions.
fn faq_backend() -> Router {
    Router::new()
        .route(
            "/categories",
            get(|| async { Json(json!({ "categories": ["A", "B"] })) }),
        )
        .route(
            "/ask",
            post(|Json(body): Json<Value>| async move {
                let message = body["message"].as_str().unwrap_or_default().to_string();
                let category = body["category"].as_str().unwrap_or_default().to_string();
                if message.contains("slow") {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                }
                Json(json!({ "answer": format!("{message}|{category}") }))
            }),
        )
}

/// Backend where every endpoint fails.
fn broken_backend() -> Router {
    let fail = || async {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "boom" })),
        )
    };
    Router::new()
        .route("/categories", get(fail))
        .route("/ask", post(fail))
}

async fn mount(state: &mut ChatState, client: &Client) {
    let effect = state.update(ChatEvent::Mount).expect("mount loads categories");
    let event = run_effect(client, effect).await;
    state.update(event);
}

async fn submit(state: &mut ChatState, client: &Client, text: &str) {
    state.update(ChatEvent::UpdateDraft(text.to_string()));
    if let Some(effect) = state.update(ChatEvent::Submit) {
        let event = run_effect(client, effect).await;
        state.update(event);
    }
}

#[tokio::test]
async fn mount_loads_categories_without_selecting_one() {
    let client = spawn_backend(faq_backend()).await;
    let mut state = ChatState::new();
    mount(&mut state, &client).await;

    let values: Vec<String> = state
        .category_options()
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(values, vec!["", "A", "B"]);
    assert_eq!(state.selected_category, "");
}

#[tokio::test]
async fn answer_follows_question_with_selected_category() {
    let client = spawn_backend(faq_backend()).await;
    let mut state = ChatState::new();
    mount(&mut state, &client).await;
    state.update(ChatEvent::SelectCategory("B".into()));

    submit(&mut state, &client, " 送料は？").await;

    assert_eq!(
        state.transcript,
        vec![Message::user(" 送料は？"), Message::bot(" 送料は？|B")]
    );
    assert!(state.draft.is_empty());
}

#[tokio::test]
async fn failing_backend_degrades_gracefully() {
    let client = spawn_backend(broken_backend()).await;
    let mut state = ChatState::new();
    mount(&mut state, &client).await;
    assert!(state.categories.is_empty());

    submit(&mut state, &client, "hello").await;

    assert_eq!(
        state.transcript,
        vec![Message::user("hello"), Message::bot(ANSWER_ERROR_TEXT)]
    );

    // Retry right away is allowed.
    submit(&mut state, &client, "hello again").await;
    assert_eq!(state.transcript.len(), 4);
}

#[tokio::test]
async fn unreachable_backend_still_allows_submit() {
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let client = Client::new(&format!("http://127.0.0.1:{port}")).unwrap();
    let mut state = ChatState::new();
    mount(&mut state, &client).await;
    assert!(state.categories.is_empty());

    state.update(ChatEvent::UpdateDraft("q".into()));
    let effect = state.update(ChatEvent::Submit);
    assert_eq!(
        effect,
        Some(Effect::Ask {
            message: "q".into(),
            category: String::new(),
        })
    );
}

#[tokio::test]
async fn blank_submit_sends_nothing() {
    let client = spawn_backend(faq_backend()).await;
    let mut state = ChatState::new();
    submit(&mut state, &client, "  \t ").await;
    assert!(state.transcript.is_empty());
    assert_eq!(state.pending, 0);
}

#[tokio::test]
async fn overlapping_submits_settle_in_completion_order() {
    let client = spawn_backend(faq_backend()).await;
    let (tx, mut rx) = mpsc::channel::<ChatEvent>(8);
    let mut state = ChatState::new();

    state.update(ChatEvent::UpdateDraft("slow one".into()));
    let first = state.update(ChatEvent::Submit).unwrap();
    spawn_effect(client.clone(), first, tx.clone());

    state.update(ChatEvent::UpdateDraft("fast one".into()));
    let second = state.update(ChatEvent::Submit).unwrap();
    spawn_effect(client.clone(), second, tx.clone());

    // Both user messages are visible before any answer arrives.
    assert_eq!(
        state.transcript,
        vec![Message::user("slow one"), Message::user("fast one")]
    );

    for _ in 0..2 {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("answer should arrive")
            .expect("channel open");
        state.update(event);
    }

    assert_eq!(
        state.transcript,
        vec![
            Message::user("slow one"),
            Message::user("fast one"),
            Message::bot("fast one|"),
            Message::bot("slow one|"),
        ]
    );
    assert_eq!(state.pending, 0);
}
