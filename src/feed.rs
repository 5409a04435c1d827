// src/feed.rs
use std::collections::HashMap;

use crate::fetcher::Snapshot;
use crate::models::{Account, PaymentTransfer, User};

/// Key a collection by identifier in one linear pass.
/// First occurrence wins; later duplicates are dropped silently.
fn dedup_by_id<T>(records: &[T], id_of: impl Fn(&T) -> i64) -> HashMap<i64, &T> {
    let mut map = HashMap::new();
    for record in records {
        map.entry(id_of(record)).or_insert(record);
    }
    map
}

/// Resolve "First Last" for the user owning `account_id`.
/// A missing account or user link yields empty name parts, never a failure.
fn full_name(
    users: &HashMap<i64, &User>,
    accounts: &HashMap<i64, &Account>,
    account_id: i64,
) -> String {
    let user_id = accounts.get(&account_id).map(|a| a.user).unwrap_or(0);
    let (first, last) = users
        .get(&user_id)
        .map(|u| (u.first_name.as_str(), u.last_name.as_str()))
        .unwrap_or(("", ""));
    format!("{} {}", first, last)
}

/// Join one snapshot into the denormalized feed.
///
/// Feed order follows the transfer list as fetched (stable filter, no
/// resorting); transfers with an empty or "failed" status are skipped. Like
/// counts come from a count index built over the deduplicated likes, one
/// entry per surviving like record.
pub fn build_feed(snapshot: &Snapshot) -> Vec<PaymentTransfer> {
    let users = dedup_by_id(&snapshot.users, |u| u.id);
    let accounts = dedup_by_id(&snapshot.accounts, |a| a.id);
    let likes = dedup_by_id(&snapshot.likes, |l| l.id);

    let mut like_counts: HashMap<i64, i64> = HashMap::new();
    for like in likes.values() {
        *like_counts.entry(like.transfer).or_insert(0) += 1;
    }

    let mut feed = Vec::new();
    for transfer in &snapshot.transfers {
        if transfer.status.is_empty() || transfer.status == "failed" {
            continue;
        }

        feed.push(PaymentTransfer {
            origin_user_name: full_name(&users, &accounts, transfer.origin_account),
            targeted_user_name: full_name(&users, &accounts, transfer.target_account),
            amount: transfer.amount as f64,
            description: transfer.description.clone(),
            likes_count: like_counts.get(&transfer.id).copied().unwrap_or(0),
        });
    }

    feed
}
