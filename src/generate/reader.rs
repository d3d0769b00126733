use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::AuthorRecord;

/// Read author records from any CSV source, sorted by last name.
///
/// The sort is stable so authors sharing a last name keep their file order.
pub fn read_authors<R: Read>(source: R) -> Result<Vec<AuthorRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_reader(source);

    let mut records = Vec::new();
    for (line, result) in reader.deserialize::<AuthorRecord>().enumerate() {
        let record = result.with_context(|| format!("Invalid author record #{}", line + 1))?;
        records.push(record);
    }

    records.sort_by(|a, b| a.lastname.cmp(&b.lastname));
    Ok(records)
}

pub fn load_authors<P: AsRef<Path>>(path: P) -> Result<Vec<AuthorRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    read_authors(BufReader::new(file))
        .with_context(|| format!("Failed to read authors from {}", path.display()))
}
