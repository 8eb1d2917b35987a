/// Dataset loading — the input boundary.
///
/// Reads the delimited-text catalog export into [`RawEntry`] rows and hands
/// them to the cleaning pass. Loading happens once per session; everything
/// downstream reads the resulting immutable [`Catalog`].
use crate::model::{Catalog, RawEntry};

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Failure to get raw rows off disk. Field-level malformation is *not* an
/// error — the cleaning pass degrades those — but an unopenable file or a
/// structurally broken CSV stream is.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open dataset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV stream")]
    Csv(#[from] csv::Error),
}

/// Deserialize raw rows from any CSV reader.
///
/// Lenient about shape: short rows are padded with absent fields and extra
/// columns (like the export's `show_id`) are ignored. Empty cells become
/// `None`.
pub fn read_raw<R: Read>(reader: R) -> Result<Vec<RawEntry>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.deserialize::<RawEntry>() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Load and clean the catalog from a CSV file on disk.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_raw(file)?;
    info!(rows = rows.len(), path = %path.display(), "dataset loaded");
    Ok(Catalog::from_raw(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in
81145628,Movie,Example One,Jane Doe,\"Ann A, Bob B\",United States,\"September 9, 2019\",2019,PG-13,90 min,\"Children & Family Movies, Comedies\"
";

    /// Headers drive field mapping, so extra columns like show_id are
    /// ignored and quoted commas stay inside one cell.
    #[test]
    fn reads_headered_csv() {
        let rows = read_raw(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(r.kind.as_deref(), Some("Movie"));
        // The quoted multi-valued cast cell stays one field; nothing after
        // it shifts into the wrong column.
        assert_eq!(r.cast.as_deref(), Some("Ann A, Bob B"));
        assert_eq!(r.country.as_deref(), Some("United States"));
        assert_eq!(r.date_added.as_deref(), Some("September 9, 2019"));
        assert_eq!(
            r.listed_in.as_deref(),
            Some("Children & Family Movies, Comedies")
        );
    }

    /// Empty cells must become `None`, not `Some("")`.
    #[test]
    fn empty_cells_are_absent() {
        let csv = "type,title,director,country\nMovie,T,,\n";
        let rows = read_raw(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].director, None);
        assert_eq!(rows[0].country, None);
    }

    /// Ragged rows are tolerated: missing trailing fields are absent.
    #[test]
    fn short_rows_are_padded() {
        let csv = "type,title,director\nTV Show,T\n";
        let rows = read_raw(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].kind.as_deref(), Some("TV Show"));
        assert_eq!(rows[0].director, None);
    }

    #[test]
    fn load_catalog_cleans_on_the_way_in() {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        let mut f = File::create(&path).unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].year_added, Some(2019));
        assert_eq!(catalog.entries()[0].duration_num, Some(90.0));
    }

    /// A missing file is a surfaced error with the offending path attached.
    #[test]
    fn missing_file_reports_path() {
        let err = load_catalog(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("not/here.csv"));
    }
}
