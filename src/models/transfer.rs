//! Transfer request model.
//!
//! Transfers are parsed and echoed back; nothing is persisted and no balance
//! changes.

use serde::{Deserialize, Serialize};

/// Request body for `POST /transfer`.
///
/// ```json
/// { "toAccount": 42, "amount": 100 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Number (not id) of the receiving account.
    pub to_account: i64,

    pub amount: i64,
}
