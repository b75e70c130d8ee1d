use serde_json::Value;

/// Read-state fields exactly as the backend sends them. Endpoints
/// disagree on both the field name (`isRead` vs `read`) and the value
/// encoding (boolean vs numeric vs stringified), so both are carried and
/// normalized here instead of trusting either one.
#[derive(Debug, Clone, Default)]
pub struct RawReadState {
    pub is_read: Option<bool>,
    pub read: Option<Value>,
}

/// A notification counts as read iff one of the known legacy encodings
/// says so: `isRead: true`, `read: 1`, `read: "1"`, or `read: "true"`.
/// Every other combination is unread.
pub fn is_read(raw: &RawReadState) -> bool {
    if raw.is_read == Some(true) {
        return true;
    }
    match &raw.read {
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => s == "1" || s == "true",
        _ => false,
    }
}
