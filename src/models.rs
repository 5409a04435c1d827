// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user of the payment system, as served by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,

    #[serde(rename = "firstName", default)]
    pub first_name: String,

    #[serde(rename = "lastName", default)]
    pub last_name: String,

    #[allow(dead_code)]
    #[serde(default)]
    pub accounts: Vec<i64>,

    #[allow(dead_code)]
    #[serde(default)]
    pub transfers: Vec<i64>,

    #[allow(dead_code)]
    #[serde(default)]
    pub likes: Vec<i64>,
}

/// An account owned by a user; balance is in the smallest currency unit
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub user: i64,

    #[allow(dead_code)]
    #[serde(rename = "accountNumber", default)]
    pub account_number: String,

    #[serde(default)]
    pub balance: i64,
}

/// A transfer of funds between two accounts
#[derive(Debug, Clone, Deserialize)]
pub struct Transfer {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub status: String,

    #[serde(rename = "originAccount", default)]
    pub origin_account: i64,

    #[serde(rename = "targetAccount", default)]
    pub target_account: i64,

    #[serde(default)]
    pub amount: i64,

    #[serde(default)]
    pub description: String,

    #[allow(dead_code)]
    #[serde(rename = "initiatedAt", default)]
    pub initiated_at: Option<DateTime<Utc>>,

    #[allow(dead_code)]
    #[serde(rename = "completedAt", default)]
    pub completed_at: Option<DateTime<Utc>>,

    #[allow(dead_code)]
    #[serde(rename = "failedAt", default)]
    pub failed_at: Option<DateTime<Utc>>,
}

/// A like attached to a transfer, used only for counting
#[derive(Debug, Clone, Deserialize)]
pub struct Like {
    #[serde(default)]
    pub id: i64,

    #[allow(dead_code)]
    #[serde(default)]
    pub user: i64,

    #[serde(default)]
    pub transfer: i64,
}

/// One entry of the denormalized payments feed.
/// The mismatched key casing (`originUsername` vs `targetedUserName`) is the
/// published wire contract, not a typo to fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransfer {
    #[serde(rename = "originUsername")]
    pub origin_user_name: String,

    #[serde(rename = "targetedUserName")]
    pub targeted_user_name: String,

    pub amount: f64,

    pub description: String,

    #[serde(rename = "likesCount")]
    pub likes_count: i64,
}

/// Shared shape of the inbound transfer request and the backend's
/// confirmation. Every field defaults: bodies are decoded best-effort and
/// missing fields take zero values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferResource {
    #[serde(rename = "originAccount", default)]
    pub origin_account: i64,

    #[serde(rename = "targetAccount", default)]
    pub target_account: i64,

    #[serde(default)]
    pub amount: i64,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub status: String,

    #[serde(rename = "initiatedAt", default)]
    pub initiated_at: Option<DateTime<Utc>>,
}
