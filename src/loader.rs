use crate::error::EgResult;
use crate::scorer::RolledSubstat;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// One equipped echo as exported: an optional display name plus its
/// rolled substat slots.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EchoEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub substats: Vec<RolledSubstat>,
}

impl EchoEntry {
    /// Display name for reports. Falls back to the 1-based position when
    /// the export carries no name.
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Echo {}", index + 1),
        }
    }
}

/// Top level of an exported echo document: `{"echo_data": [ ... ]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EchoFile {
    pub echo_data: Vec<EchoEntry>,
}

/// Parses an exported echo document from any reader.
///
/// Unrecognized fields are ignored, so documents that carry extra export
/// metadata (set bonuses, levels, cost) load without modification.
pub fn read_echo_file<R: Read>(reader: R) -> EgResult<EchoFile> {
    let file: EchoFile = serde_json::from_reader(reader)?;
    debug!("Parsed {} echo entries.", file.echo_data.len());
    Ok(file)
}

pub fn load_echo_file<P: AsRef<Path>>(path: P) -> EgResult<EchoFile> {
    let file = File::open(path)?;
    read_echo_file(BufReader::new(file))
}
