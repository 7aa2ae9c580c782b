use crate::cache::{CacheStore, EntityKey};
use crate::connection::Connection;
use crate::policy::{FieldArgs, FieldPolicies};
use mpdx_cache_lib::{
    config::{CacheArgs, CacheConfig},
    utils::init_logging,
};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Malformed record on line {0}: {1:?}")]
    MalformedRecord(usize, serde_json::Error),
    #[error("Invalid entity key: {0:?}")]
    InvalidEntity(String),
}

/// One recorded page response from the donor API, as captured by the client:
/// the owning entity, the field that was fetched, its call arguments and the
/// relay-shaped response data.
#[derive(Debug, Deserialize)]
pub struct ReplayRecord {
    pub entity: String,
    pub field: String,
    #[serde(default)]
    pub args: serde_json::Map<String, serde_json::Value>,
    pub data: serde_json::Value,
}

pub fn exec(args: CacheArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => CacheConfig::from_file(path)?,
        None => CacheConfig::from_opts(args.clone()),
    };

    init_logging(&config)?;

    info!("Configuration: {:?}", config);

    let policies = FieldPolicies::from_config(&config.fields)?;
    let mut store = CacheStore::new(policies);

    let file = File::open(&args.input)?;
    let reader = BufReader::new(file);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: ReplayRecord = serde_json::from_str(&line)
            .map_err(|e| ReplayError::MalformedRecord(idx + 1, e))?;
        let entity: EntityKey = record
            .entity
            .parse()
            .map_err(ReplayError::InvalidEntity)?;

        let field_args = FieldArgs::from(record.args);
        let incoming = Connection::from_response(&record.data);
        let merged = store.write_page(&entity, &record.field, &field_args, &incoming);

        println!("{}", serde_json::to_string(merged)?);
    }

    info!(
        "Replayed {} connections from '{}'",
        store.len(),
        args.input.display()
    );

    Ok(())
}
