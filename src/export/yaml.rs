//! YAML export

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::storage::Storage;

use super::json::Snapshot;

/// Export a snapshot of all data as YAML
pub fn export_yaml<W: Write>(storage: &Storage, writer: W) -> FintrackResult<()> {
    let snapshot = Snapshot::collect(storage)?;
    serde_yaml::to_writer(writer, &snapshot).map_err(|e| FintrackError::Export(e.to_string()))
}
