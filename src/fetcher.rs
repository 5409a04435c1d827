// src/fetcher.rs
use futures_util::future::join4;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::models::{Account, Like, Transfer, User};
use crate::remote::{Backend, FetchError};

/// One read request's worth of raw backend data, in fetch order.
/// Built fresh per request; nothing is cached across calls.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub accounts: Vec<Account>,
    pub transfers: Vec<Transfer>,
    pub likes: Vec<Like>,
}

fn spawn_list<T>(
    backend: Arc<Backend>,
    resource: &'static str,
) -> JoinHandle<Result<Vec<T>, FetchError>>
where
    T: DeserializeOwned + Send + 'static,
{
    tokio::spawn(async move {
        match backend.list::<T>(resource).await {
            Ok(records) => Ok(records),
            // A malformed body degrades that collection to empty so the join
            // can still run on partial data.
            Err(FetchError::Decode(e)) => {
                warn!("error decoding json from /{}: {}", resource, e);
                Ok(Vec::new())
            }
            // Transport failures stay fatal for the whole snapshot.
            Err(e) => Err(e),
        }
    })
}

/// Fan out the four collection fetches and wait for all of them.
///
/// Each task owns and returns its own result; results are only combined here,
/// after the barrier, so concurrent tasks never share output state. A task
/// that panics resolves its handle with a `JoinError` rather than leaving the
/// barrier waiting.
pub async fn fetch_snapshot(backend: &Arc<Backend>) -> Result<Snapshot, FetchError> {
    let users = spawn_list::<User>(Arc::clone(backend), "users");
    let accounts = spawn_list::<Account>(Arc::clone(backend), "accounts");
    let transfers = spawn_list::<Transfer>(Arc::clone(backend), "transfers");
    let likes = spawn_list::<Like>(Arc::clone(backend), "likes");

    // Barrier: all four tasks finish before any result is inspected.
    let (users, accounts, transfers, likes) = join4(users, accounts, transfers, likes).await;

    Ok(Snapshot {
        users: users??,
        accounts: accounts??,
        transfers: transfers??,
        likes: likes??,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{response::Json, routing::get, Router};
    use serde_json::json;
    use std::time::Duration;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service())
                .await
                .unwrap();
        });
        format!("http://{}", addr)
    }

    fn backend(base_url: &str) -> Arc<Backend> {
        Arc::new(Backend::new(base_url, Duration::from_secs(2)).unwrap())
    }

    #[tokio::test]
    async fn all_four_collections_land_in_the_snapshot() {
        let router = Router::new()
            .route(
                "/users",
                get(|| async { Json(json!([{"id": 1, "firstName": "A", "lastName": "X"}])) }),
            )
            .route(
                "/accounts",
                get(|| async { Json(json!([{"id": 10, "user": 1, "balance": 500}])) }),
            )
            .route(
                "/transfers",
                get(|| async {
                    Json(json!([{"id": 100, "status": "completed", "amount": 50}]))
                }),
            )
            .route(
                "/likes",
                get(|| async { Json(json!([{"id": 1, "user": 1, "transfer": 100}])) }),
            );
        let base = serve(router).await;

        let snapshot = fetch_snapshot(&backend(&base)).await.unwrap();
        assert_eq!(snapshot.users.len(), 1);
        assert_eq!(snapshot.accounts.len(), 1);
        assert_eq!(snapshot.transfers.len(), 1);
        assert_eq!(snapshot.likes.len(), 1);
    }

    #[tokio::test]
    async fn malformed_collection_degrades_to_empty() {
        let router = Router::new()
            .route("/users", get(|| async { Json(json!([{"id": 1}])) }))
            .route("/accounts", get(|| async { Json(json!([])) }))
            .route("/transfers", get(|| async { Json(json!([])) }))
            // Not an array at all; the likes fetch must degrade, not fail.
            .route("/likes", get(|| async { "<html>oops</html>" }));
        let base = serve(router).await;

        let snapshot = fetch_snapshot(&backend(&base)).await.unwrap();
        assert_eq!(snapshot.users.len(), 1);
        assert!(snapshot.likes.is_empty());
    }

    #[tokio::test]
    async fn unreachable_backend_fails_the_snapshot() {
        // Bind then drop to find a port with no listener behind it.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = fetch_snapshot(&backend(&format!("http://{}", addr))).await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
