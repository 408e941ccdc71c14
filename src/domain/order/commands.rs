use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// Order Commands - Represent caller intent
// ============================================================================

/// Unvalidated order fields exactly as the caller sent them.
///
/// Every field is kept as a raw JSON value so that a wrong shape is reported
/// by the field checks with their own messages instead of by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

#[derive(Debug, Clone)]
pub enum OrderCommand {
    Create {
        payload: OrderPayload,
    },
    Read {
        order_id: String,
    },
    Update {
        order_id: String,
        payload: OrderPayload,
    },
    Delete {
        order_id: String,
    },
    List,
}

impl OrderCommand {
    /// Stable operation name used for logs and metric labels.
    pub fn operation(&self) -> &'static str {
        match self {
            OrderCommand::Create { .. } => "create",
            OrderCommand::Read { .. } => "read",
            OrderCommand::Update { .. } => "update",
            OrderCommand::Delete { .. } => "delete",
            OrderCommand::List => "list",
        }
    }
}
