use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::Value;

/// Key used for a transaction without a sender.
pub const NULL_KEY: &str = "null";

/// Sender and recipient of a single transaction.
///
/// Serializes as a single-entry map `{sender: recipient}`. A missing sender
/// becomes the key "null". A missing recipient (contract creation) is
/// serialized as JSON null.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransferLink {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl TransferLink {
    /// Reads `from` and `to` from a transaction object.
    ///
    /// Fields that are absent, null or not strings are treated as absent.
    pub fn from_transaction(tx: &Value) -> Self {
        let field = |name: &str| tx.get(name).and_then(Value::as_str).map(str::to_owned);
        Self {
            from: field("from"),
            to: field("to"),
        }
    }
}

impl Serialize for TransferLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.from.as_deref().unwrap_or(NULL_KEY), &self.to)?;
        map.end()
    }
}

/// Produces one link per transaction, in block order.
pub fn links_from_transactions(transactions: &[Value]) -> Vec<TransferLink> {
    transactions
        .iter()
        .map(TransferLink::from_transaction)
        .collect()
}

/// Encodes links as a compact JSON string, e.g., `[{"0xA":"0xB"}]`.
pub fn encode_links(links: &[TransferLink]) -> Result<String, serde_json::Error> {
    serde_json::to_string(links)
}
