//! Tabular input: one submission per CSV row.

use crate::{Error, Result, Submission};
use origin_core::Field;
use std::{io::Read, path::Path};

/// Reads every row of the CSV at `path`.
///
/// The header row supplies the field names. Empty cells are omitted from the
/// row's submission. Columns that name no certificate field are logged and
/// still forwarded; missing ones are left for the service to reject.
pub fn read_csv(path: &Path) -> Result<Vec<Submission>> {
    let reader = csv::Reader::from_path(path).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    collect_rows(reader).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Same as [`read_csv`] for any reader.
pub fn read_csv_from<R: Read>(input: R) -> csv::Result<Vec<Submission>> {
    collect_rows(csv::Reader::from_reader(input))
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> csv::Result<Vec<Submission>> {
    let headers = reader.headers()?.clone();
    for column in unknown_columns(&headers) {
        tracing::warn!("CSV column {column:?} is not a certificate field");
    }

    reader
        .records()
        .map(|row| {
            let row = row?;
            Ok(headers
                .iter()
                .zip(row.iter())
                .filter(|(_, value)| !value.is_empty())
                .collect())
        })
        .collect()
}

fn unknown_columns(headers: &csv::StringRecord) -> Vec<&str> {
    headers
        .iter()
        .filter(|header| header.parse::<Field>().is_err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_are_omitted() {
        let input = "exporter,consignee,quantity\nAcme,,10\n,Globex,\n";
        let rows = read_csv_from(input.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("exporter"), Some("Acme"));
        assert_eq!(rows[0].get("consignee"), None);
        assert_eq!(rows[0].get("quantity"), Some("10"));
        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[1].get("consignee"), Some("Globex"));
    }

    #[test]
    fn unknown_columns_are_reported_and_forwarded() {
        let input = "exporter,Consignee,colour,date\nAcme,Globex,red,2025-01-31\n";
        let mut reader = csv::Reader::from_reader(input.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(unknown_columns(&headers), ["Consignee", "colour"]);

        let rows = read_csv_from(input.as_bytes()).unwrap();
        assert_eq!(rows[0].get("colour"), Some("red"));
        assert_eq!(rows[0].get("exporter"), Some("Acme"));
    }

    #[test]
    fn full_header_has_no_unknown_columns() {
        let headers = csv::StringRecord::from(Field::ALL.map(Field::name).to_vec());
        assert!(unknown_columns(&headers).is_empty());
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let rows = read_csv_from("exporter,consignee\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let input = "exporter,consignee\nAcme,Globex,extra\n";
        assert!(read_csv_from(input.as_bytes()).is_err());
    }

    #[test]
    fn absent_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("origin_data_1.csv");

        let err = read_csv(&path).unwrap_err();
        assert!(matches!(err, Error::Csv { .. }));
        assert!(err.to_string().contains("origin_data_1.csv"), "{err}");
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        std::fs::write(&path, "exporter,date\nAcme,2025-01-31\n").unwrap();

        let rows = read_csv(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("date"), Some("2025-01-31"));
    }
}
