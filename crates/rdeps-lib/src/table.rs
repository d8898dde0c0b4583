//! Reading the package table from JSON.
//!
//! The table is an array of flat objects, one per published package, for example
//! `[{"Package": "A", "Source": "cran", "Version": "1.0", "Date": "2015-01-01", "Imports": "B C"}]`.

use crate::record::PackageRecord;

/// Reads a JSON table from `path`. See [`records_from_json()`].
pub fn read_records_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Vec<PackageRecord>> {
	let path = path.as_ref();
	log::debug!("Reading package table from {}", path.display());
	let file = std::fs::File::open(path)?;
	let json: serde_json::Value = serde_json::from_reader(std::io::BufReader::new(file))?;
	let records = records_from_json(&json)?;
	log::info!("Read {} records from {}", records.len(), path.display());
	Ok(records)
}

/// Converts a JSON array of objects into records.
///
/// Numbers and booleans are kept in their JSON text form and `null` becomes an empty value.
/// Required columns are not checked here, that happens when the snapshot is built.
/// # Errors
/// - [`Parse`](crate::Error::Parse) when `v` is not an array of objects or a value is an array or object.
pub fn records_from_json(v: &serde_json::Value) -> crate::Result<Vec<PackageRecord>> {
	use crate::Error::Parse;

	let arr = v.as_array().ok_or_else(|| Parse("package table must be an array".to_string()))?;

	let mut records = Vec::<PackageRecord>::with_capacity(arr.len());
	for (i, elem) in arr.iter().enumerate() {
		let obj = elem.as_object().ok_or_else(|| Parse(format!("table row {} must be an object", i)))?;
		let mut record = PackageRecord::new();
		for (key, value) in obj {
			let value = match value {
				serde_json::Value::Null => String::new(),
				serde_json::Value::String(s) => s.clone(),
				serde_json::Value::Bool(b) => b.to_string(),
				serde_json::Value::Number(n) => n.to_string(),
				serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
					return Err(Parse(format!("table row {} field `{}` must be a scalar", i, key)));
				},
			};
			record.insert(key.as_str(), value);
		}
		records.push(record);
	}

	Ok(records)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scalars_are_stringified() {
		let json = serde_json::json!([
			{ "Package": "A", "Source": "cran", "Version": 1.5, "Date": "2015-01-01", "Imports": null, "Archived": true }
		]);
		let records = records_from_json(&json).unwrap();
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].version(), "1.5");
		assert_eq!(records[0].get("Imports"), "");
		assert_eq!(records[0].get("Archived"), "true");
	}

	#[test]
	fn nested_values_are_rejected() {
		let json = serde_json::json!([{ "Package": "A", "Imports": ["B"] }]);
		assert!(matches!(records_from_json(&json), Err(crate::Error::Parse(_))));
	}

	#[test]
	fn table_must_be_array() {
		let json = serde_json::json!({ "Package": "A" });
		assert!(matches!(records_from_json(&json), Err(crate::Error::Parse(_))));
	}
}
