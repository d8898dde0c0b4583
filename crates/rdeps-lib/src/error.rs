//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("bincode error: {0}")]
	Bincode(#[from] bincode::Error),
	#[error("parsing error: {0}")]
	Parse(String),
	/// A record is missing one of the fields every record must carry.
	#[error("record {index} is missing required field `{field}`")]
	MalformedRecord {
		index: usize,
		field: &'static str,
	},
}
