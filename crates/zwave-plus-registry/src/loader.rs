use crate::command_class::CommandClass;
use crate::error::{RegistryError, Result};
use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What a node reported during interview: its Z-Wave Plus device type and
/// the command classes in its node information frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct NodeSnapshot {
    pub node_id: u8,
    #[serde(deserialize_with = "de_code")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub device_type: u16,
    #[serde(default)]
    pub command_classes: Vec<CommandClass>,
}

/// Parses `0x0700`, `0700h` style hex or a plain decimal code.
pub fn parse_device_type_code(s: &str) -> Result<u16> {
    let t = s.trim();
    let lower = t.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u16::from_str_radix(hex, 16)
    } else if let Some(hex) = lower.strip_suffix('h') {
        u16::from_str_radix(hex, 16)
    } else {
        lower.parse::<u16>()
    };
    parsed.map_err(|_| RegistryError::InvalidCode(t.to_string()))
}

fn de_code<'de, D>(de: D) -> core::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }
    match Raw::deserialize(de)? {
        Raw::Int(n) => u16::try_from(n)
            .map_err(|_| serde::de::Error::custom(RegistryError::InvalidCode(n.to_string()))),
        Raw::Text(s) => parse_device_type_code(&s).map_err(serde::de::Error::custom),
    }
}

pub fn load_snapshot_file(path: impl AsRef<Path>) -> anyhow::Result<NodeSnapshot> {
    let path = path.as_ref();
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading snapshot: {}", path.display()))?;
    let snap: NodeSnapshot = serde_yaml::from_str(&raw)
        .with_context(|| format!("decoding snapshot: {}", path.display()))?;
    Ok(snap)
}

pub fn load_snapshots_dir(dir: impl AsRef<Path>) -> anyhow::Result<Vec<NodeSnapshot>> {
    let dir = dir.as_ref();
    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("listing snapshots: {}", dir.display()))?
    {
        let path = entry?.path();
        if let Some(ext) = path.extension() {
            if ext == "yml" || ext == "yaml" {
                entries.push(path);
            }
        }
    }
    entries.sort();
    entries.iter().map(load_snapshot_file).collect()
}
