pub mod account;
pub mod date;
pub mod error;
pub mod ledger;
pub mod profile;
pub mod request;
pub mod teller;

use crate::request::CsvRequest;
use anyhow::Context;
use csv::ReaderBuilder;
use std::fs::File;

/// Opens a batch request file and yields its rows one at a time. Failures
/// are surfaced per record so a bad line does not abort the whole batch.
pub fn stream_requests(
    path: &str,
) -> anyhow::Result<impl Iterator<Item = csv::Result<CsvRequest>>> {
    let file = File::open(path).with_context(|| format!("opening request file '{}'", path))?;
    let rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    Ok(rdr.into_deserialize::<CsvRequest>())
}
