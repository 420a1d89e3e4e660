use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::{Dataset, InputError, RawValue};

pub fn open_maybe_gz(path: &Path, gzip: bool) -> Result<Box<dyn Read>, InputError> {
    let file = BufReader::new(File::open(path)?);
    if gzip {
        Ok(Box::new(MultiGzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

pub fn read_delimited(path: &Path, delimiter: u8, gzip: bool) -> Result<Dataset, InputError> {
    let reader = open_maybe_gz(path, gzip)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(RawValue::from_text).collect());
    }

    Dataset::from_rows(path, headers, rows)
}
