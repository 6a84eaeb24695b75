use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One record of a geographic input stream.
///
/// Sources emit nodes before the links that reference them; a link whose
/// endpoints have not been seen is handled per
/// [`LoadConfig::strict_links`](super::LoadConfig::strict_links).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapRecord {
    Node { id: i64, lat: f64, lon: f64 },
    Link { from: i64, to: i64 },
}

/// Streaming source of map records.
///
/// Implementations own all semantic filtering (which roads are
/// traversable, which classifications to keep); the graph applies none.
pub trait MapSource {
    /// Next record, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Implementations surface their read/parse failures as [`Error`].
    fn next_record(&mut self) -> Result<Option<MapRecord>, Error>;
}

/// In-memory source, for tests and embedded data sets.
#[derive(Debug, Clone)]
pub struct MemorySource {
    records: std::vec::IntoIter<MapRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<MapRecord>) -> Self {
        Self {
            records: records.into_iter(),
        }
    }
}

impl MapSource for MemorySource {
    fn next_record(&mut self) -> Result<Option<MapRecord>, Error> {
        Ok(self.records.next())
    }
}
