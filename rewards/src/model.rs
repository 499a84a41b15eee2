use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted by the client. Money and date/time fields
/// stay text end to end; the scoring rules parse what they need.
///
/// Missing fields default to empty rather than rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub short_description: String,
    pub price: String,
}
