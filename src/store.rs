use std::path::Path;

use crate::{
    error::{AscseeError, AscseeResult},
    model::Order,
};

/// Extension appended to order files written by [`save`].
pub const ORDER_EXT: &str = "json";

/// Reads an order file and deserializes the JSON array into an [`Order`].
///
/// A path that does not resolve to an existing file is a `NotFound` error;
/// callers report it and keep the menu loop alive. Every field the writer
/// serialized must be present and well-formed, or the whole load fails as
/// `MalformedData` with no partial order constructed.
pub fn load(path: impl AsRef<Path>) -> AscseeResult<Order> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(AscseeError::not_found(format!(
            "'{}' could not be found",
            path.display()
        )));
    }

    let text = std::fs::read_to_string(path).map_err(|e| {
        AscseeError::malformed(format!("failed to read '{}': {e}", path.display()))
    })?;
    let order: Order = serde_json::from_str(&text).map_err(|e| {
        AscseeError::malformed(format!("failed to parse '{}': {e}", path.display()))
    })?;

    tracing::debug!(path = %path.display(), jobs = order.len(), "loaded order");
    Ok(order)
}

/// Serializes the order as a JSON array, one object per spec, overwriting any
/// existing file at the destination.
pub fn save(order: &Order, path: impl AsRef<Path>) -> AscseeResult<()> {
    use anyhow::Context as _;

    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create order directory '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(order)
        .map_err(|e| AscseeError::malformed(format!("failed to serialize order: {e}")))?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write order '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), jobs = order.len(), "saved order");
    Ok(())
}
