// src/transfer.rs
use chrono::Utc;
use tracing::{info, warn};

use crate::models::TransferResource;
use crate::remote::{Backend, FetchError};

/// Outcome of one submission attempt. Exactly three user-visible results:
/// created, rejected for funds, or failed on a dependency.
#[derive(Debug)]
pub enum SubmissionOutcome {
    Created(TransferResource),
    InsufficientFunds,
    DependencyFailure(FetchError),
}

/// Run the balance-gated submission flow, strictly sequential:
/// look up the origin account, compare, stamp the initiation time, forward.
///
/// A failed balance lookup is reported as a dependency failure rather than
/// treated as a zero balance — "could not verify funds" is not the same
/// answer as "confirmed zero balance". The boundary is inclusive: a balance
/// exactly equal to the requested amount proceeds.
pub async fn submit_transfer(backend: &Backend, mut payload: TransferResource) -> SubmissionOutcome {
    let account = match backend.account(payload.origin_account).await {
        Ok(account) => account,
        Err(e) => {
            warn!(
                "balance lookup failed for account {}: {}",
                payload.origin_account, e
            );
            return SubmissionOutcome::DependencyFailure(e);
        }
    };

    if account.balance < payload.amount {
        info!(
            "rejecting transfer of {} from account {} (balance {})",
            payload.amount, payload.origin_account, account.balance
        );
        return SubmissionOutcome::InsufficientFunds;
    }

    payload.initiated_at = Some(Utc::now());

    match backend.create_transfer(&payload).await {
        Ok(created) => SubmissionOutcome::Created(created),
        Err(e) => SubmissionOutcome::DependencyFailure(e),
    }
}
