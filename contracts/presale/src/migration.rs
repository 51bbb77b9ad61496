use soroban_sdk::Env;

use crate::errors::Error;
use crate::storage::{get_schema_version, set_schema_version};

/// Layout of the Round / VestingRecord tables this build reads and writes.
pub const SCHEMA_VERSION: u32 = 1;

pub trait Migratable {
    /// Rewrites stored data laid out as `from_version` into the next version,
    /// returning that version.
    fn migrate_step(env: &Env, from_version: u32) -> Result<u32, Error>;
}

pub struct PresaleSchema;

impl Migratable for PresaleSchema {
    fn migrate_step(_env: &Env, from_version: u32) -> Result<u32, Error> {
        match from_version {
            // Deployments before versioning stored v1 tables without a marker.
            0 => Ok(1),
            _ => Err(Error::UnknownSchemaVersion),
        }
    }
}

/// Steps stored data up to `SCHEMA_VERSION`. Returns `(from, to)`.
pub fn execute_migration<T: Migratable>(env: &Env) -> Result<(u32, u32), Error> {
    let from_version = get_schema_version(env);
    if from_version == SCHEMA_VERSION {
        return Err(Error::SchemaUpToDate);
    }
    if from_version > SCHEMA_VERSION {
        return Err(Error::UnknownSchemaVersion);
    }

    let mut version = from_version;
    while version < SCHEMA_VERSION {
        version = T::migrate_step(env, version)?;
    }
    set_schema_version(env, version);
    Ok((from_version, version))
}
