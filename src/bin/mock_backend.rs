// Standalone stand-in for the remote data source, for local development:
//
//   cargo run --bin mock_backend
//   BACKEND_URL=http://127.0.0.1:4000 cargo run
use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

struct MockData {
    users: Value,
    accounts: Value,
    transfers: Value,
    likes: Value,
    next_id: AtomicI64,
}

fn sample_data() -> MockData {
    MockData {
        users: json!([
            {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "accounts": [10], "transfers": [100], "likes": [1]},
            {"id": 2, "firstName": "Alan", "lastName": "Turing", "accounts": [11], "transfers": [101], "likes": [2]}
        ]),
        accounts: json!([
            {"id": 10, "user": 1, "accountNumber": "ACC-0010", "balance": 5000},
            {"id": 11, "user": 2, "accountNumber": "ACC-0011", "balance": 250}
        ]),
        transfers: json!([
            {"id": 100, "status": "completed", "originAccount": 10, "targetAccount": 11, "amount": 120, "description": "lunch"},
            {"id": 101, "status": "pending", "originAccount": 11, "targetAccount": 10, "amount": 60, "description": "split"},
            {"id": 102, "status": "failed", "originAccount": 11, "targetAccount": 10, "amount": 999, "description": "oops"}
        ]),
        likes: json!([
            {"id": 1, "user": 2, "transfer": 100},
            {"id": 2, "user": 1, "transfer": 101},
            {"id": 3, "user": 2, "transfer": 101}
        ]),
        next_id: AtomicI64::new(1000),
    }
}

async fn users(State(data): State<Arc<MockData>>) -> Json<Value> {
    Json(data.users.clone())
}

async fn accounts(State(data): State<Arc<MockData>>) -> Json<Value> {
    Json(data.accounts.clone())
}

async fn account(State(data): State<Arc<MockData>>, Path(id): Path<i64>) -> Json<Value> {
    let found = data
        .accounts
        .as_array()
        .and_then(|list| list.iter().find(|a| a["id"] == json!(id)).cloned());
    Json(found.unwrap_or_else(|| json!({})))
}

async fn transfers(State(data): State<Arc<MockData>>) -> Json<Value> {
    Json(data.transfers.clone())
}

async fn create_transfer(
    State(data): State<Arc<MockData>>,
    Json(mut payload): Json<Value>,
) -> Json<Value> {
    let id = data.next_id.fetch_add(1, Ordering::SeqCst);
    payload["id"] = json!(id);
    payload["status"] = json!("pending");
    println!("Created transfer {}: {}", id, payload);
    Json(payload)
}

async fn likes(State(data): State<Arc<MockData>>) -> Json<Value> {
    Json(data.likes.clone())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data = Arc::new(sample_data());

    let app = Router::new()
        .route("/users", get(users))
        .route("/accounts", get(accounts))
        .route("/accounts/:id", get(account))
        .route("/transfers", get(transfers))
        .route("/transfers/", post(create_transfer))
        .route("/likes", get(likes))
        .with_state(data);

    let addr = SocketAddr::from(([127, 0, 0, 1], 4000));
    println!("Mock backend listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
