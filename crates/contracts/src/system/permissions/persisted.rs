//! Stored form of [`UserPermissions`]
//!
//! The record is the plain JSON of `UserPermissions` with a `version` field
//! next to it. Records written before the field existed decode as version 1.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::UserPermissions;

pub const CURRENT_PERMISSIONS_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PermissionsFormatError {
    #[error("invalid permissions record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("permissions record version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

#[derive(Serialize)]
struct StoredRecord<'a> {
    version: u32,
    #[serde(flatten)]
    permissions: &'a UserPermissions,
}

#[derive(Deserialize)]
struct LoadedRecord {
    #[serde(default = "legacy_version")]
    version: u32,
    #[serde(flatten)]
    permissions: UserPermissions,
}

fn legacy_version() -> u32 {
    1
}

pub fn encode_permissions(permissions: &UserPermissions) -> Result<String, PermissionsFormatError> {
    let record = StoredRecord {
        version: CURRENT_PERMISSIONS_VERSION,
        permissions,
    };
    Ok(serde_json::to_string(&record)?)
}

pub fn decode_permissions(raw: &str) -> Result<UserPermissions, PermissionsFormatError> {
    let record: LoadedRecord = serde_json::from_str(raw)?;
    if record.version > CURRENT_PERMISSIONS_VERSION {
        return Err(PermissionsFormatError::UnsupportedVersion {
            found: record.version,
            supported: CURRENT_PERMISSIONS_VERSION,
        });
    }
    Ok(record.permissions)
}
