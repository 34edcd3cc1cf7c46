use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::RenderTarget;

use super::{Timeline, TimelineSnapshot};

pub const TIMELINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TimelineSnapshot,
}

#[derive(Serialize)]
struct BorrowedContractV1<'a> {
    schema_version: u32,
    snapshot: &'a TimelineSnapshot,
}

impl TimelineSnapshot {
    /// Wraps the snapshot as `{ "schema_version": 1, "snapshot": ... }`.
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = BorrowedContractV1 {
            schema_version: TIMELINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both the bare snapshot and the versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<TimelineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: TimelineSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != TIMELINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version {} (expected {TIMELINE_SNAPSHOT_JSON_SCHEMA_V1})",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: RenderTarget> Timeline<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
