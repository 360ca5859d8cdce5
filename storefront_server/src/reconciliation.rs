//! The paid-but-unfulfilled outbox.
//!
//! A payment that succeeds followed by a fulfillment submission that fails is a genuine partial-failure state: the
//! money has moved and nothing will ship. The proxy cannot reverse the payment, so it records the complete failed
//! order durably here for manual reconciliation (or a retry tool), in addition to surfacing the error to the caller.
//! Records are appended as one JSON document per line so a crash mid-write corrupts at most the final line.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use log::*;
use printful_tools::NewOrder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedFulfillment {
    pub session_id: String,
    pub order: NewOrder,
    pub error: String,
    pub failed_at: DateTime<Utc>,
}

impl FailedFulfillment {
    pub fn new(session_id: &str, order: NewOrder, error: impl ToString) -> Self {
        Self { session_id: session_id.to_string(), order, error: error.to_string(), failed_at: Utc::now() }
    }
}

#[derive(Debug, Clone)]
pub struct FulfillmentOutbox {
    path: PathBuf,
}

impl FulfillmentOutbox {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Appends the record. Callers must treat a write failure as an operator emergency: at that point the only
    /// remaining trace of the order is the server log.
    pub fn record(&self, failure: &FailedFulfillment) -> Result<(), std::io::Error> {
        let mut line = serde_json::to_string(failure).map_err(std::io::Error::other)?;
        line.push('\n');
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;
        warn!(
            "🚨️ Recorded paid-but-unfulfilled order for session {} in {}. Manual reconciliation required.",
            failure.session_id,
            self.path.display()
        );
        Ok(())
    }

    /// Reads every decodable record. Fails soft on a missing file and skips corrupt lines, since this is a manual
    /// recovery path and partial visibility beats none.
    pub fn pending(&self) -> Vec<FailedFulfillment> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        raw.lines()
            .filter(|l| !l.trim().is_empty())
            .filter_map(|l| {
                serde_json::from_str(l)
                    .map_err(|e| warn!("🚨️ Skipping corrupt outbox line in {}: {e}", self.path.display()))
                    .ok()
            })
            .collect()
    }
}
