use super::record::Interaction;
use crate::core::ids::ResidueId;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactMapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Contact map root must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// One parsed atom path of the form `/chain/resnum/resname/atomname`.
///
/// Leading/trailing slashes are stripped before splitting; paths with fewer
/// than four segments are malformed. Extra segments are tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AtomPath {
    chain: String,
    res_num: String,
    res_name: String,
}

impl AtomPath {
    fn parse(raw: &str) -> Option<Self> {
        let mut segments = raw.trim_matches('/').split('/');
        let chain = segments.next()?.to_string();
        let res_num = segments.next()?.to_string();
        let res_name = segments.next()?.to_string();
        // The atom-name segment is required for a well-formed path even
        // though residue identity does not use it.
        segments.next()?;
        if chain.is_empty() {
            return None;
        }
        Some(Self {
            chain,
            res_num,
            res_name,
        })
    }

    fn residue_id(&self) -> ResidueId {
        ResidueId::new(&self.chain, &self.res_name, &self.res_num)
    }
}

/// A contact record as emitted by the external geometric-contact tool.
///
/// Every field is optional upstream; defaults follow the documented contract
/// (`type` → "unknown", `distance` → 0.0, missing `bgn_atom` → malformed).
#[derive(Debug, Deserialize)]
struct ContactRecord {
    #[serde(default)]
    bgn_atom: String,
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
    #[serde(default)]
    distance: f64,
}

fn default_kind() -> String {
    "unknown".to_string()
}

/// The value attached to an atom-path key. Only `contact` matters; the field
/// may hold a single record or a list of records.
#[derive(Debug, Deserialize)]
struct AtomEntry {
    #[serde(default)]
    contact: Option<OneOrMany>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Value>),
    One(Value),
}

impl OneOrMany {
    fn into_values(self) -> Vec<Value> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Parses a per-atom contact map into residue-level interaction records.
///
/// Per-entry malformations (short atom paths, non-object values, contacts with
/// a malformed partner path) are skipped silently by design; the upstream tool
/// emits heterogeneous records. Only a structurally corrupt top level (not a
/// JSON object) is fatal. The parser does not deduplicate; downstream
/// consumers set-ify the result.
pub fn parse_contact_map(reader: impl Read) -> Result<Vec<Interaction>, ContactMapError> {
    let root: Value = serde_json::from_reader(reader)?;
    let map = match root {
        Value::Object(map) => map,
        Value::Null => return Err(ContactMapError::NotAnObject("null")),
        Value::Bool(_) => return Err(ContactMapError::NotAnObject("a boolean")),
        Value::Number(_) => return Err(ContactMapError::NotAnObject("a number")),
        Value::String(_) => return Err(ContactMapError::NotAnObject("a string")),
        Value::Array(_) => return Err(ContactMapError::NotAnObject("an array")),
    };

    let mut interactions = Vec::new();
    for (atom_key, atom_value) in map {
        let Some(source) = AtomPath::parse(&atom_key) else {
            continue;
        };
        let Ok(entry) = serde_json::from_value::<AtomEntry>(atom_value) else {
            continue;
        };
        let Some(contacts) = entry.contact else {
            continue;
        };
        for contact_value in contacts.into_values() {
            let Ok(record) = serde_json::from_value::<ContactRecord>(contact_value) else {
                continue;
            };
            let Some(partner) = AtomPath::parse(&record.bgn_atom) else {
                continue;
            };
            interactions.push(Interaction::new(
                source.residue_id(),
                partner.residue_id(),
                &record.kind,
                record.distance.max(0.0),
            ));
        }
    }
    Ok(interactions)
}

/// Parses a contact map from a file path with scoped file acquisition.
pub fn parse_contact_map_path<P: AsRef<Path>>(path: P) -> Result<Vec<Interaction>, ContactMapError> {
    let file = File::open(path)?;
    parse_contact_map(BufReader::new(file))
}
