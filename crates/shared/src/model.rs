/// Plain mapping handed to the document store.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Capability shared by every persisted entity: check its fields, then turn
/// it into a [`Document`].
pub trait Model {
    fn validate(&self) -> crate::Result<()>;

    fn to_dict(&self) -> Document;
}

/// Fails with `Invalid ObjectId: <value>` unless `value` is the 24 hex digit
/// form of a document-store [`ObjectId`](crate::ObjectId).
pub fn validate_object_id(value: &str) -> crate::Result<()> {
    if crate::ObjectId::parse_str(value).is_err() {
        crate::bail!("Invalid ObjectId: {value}");
    }

    Ok(())
}
