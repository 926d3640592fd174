//! CSV export of grid rows
//!
//! Comma separated, every field double-quoted, UTF-8 byte-order mark, and a
//! header row taken from the fixed column labels rather than field names.

use crate::model::{Column, Movie};
use anyhow::{Context, Result};
use chrono::Local;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write movies as CSV to any writer
pub fn write_csv<'a, W, I>(mut writer: W, movies: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Movie>,
{
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = WriterBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(Column::ALL.iter().map(|c| c.label()))?;
    for movie in movies {
        csv_writer.write_record(Column::ALL.iter().map(|c| c.value(movie)))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes exports into a directory with timestamped file names
pub struct CsvExporter {
    dir: PathBuf,
    stem: String,
}

impl CsvExporter {
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
        }
    }

    fn next_path(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d-%H%M%S%.3f");
        self.dir.join(format!("{}-{}.csv", self.stem, stamp))
    }

    /// Export the given movies to a new file and return its path
    pub fn export<'a, I>(&self, movies: I) -> Result<PathBuf>
    where
        I: IntoIterator<Item = &'a Movie>,
    {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).with_context(|| {
                format!("Could not create export directory {}", self.dir.display())
            })?;
        }

        let path = self.next_path();
        let file = File::create(&path)
            .with_context(|| format!("Could not create {}", path.display()))?;
        write_csv(file, movies)?;

        tracing::info!(path = %path.display(), "csv exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn man_of_steel() -> Movie {
        Movie {
            title: "Man of Steel".to_string(),
            year: "2013".to_string(),
            imdb_id: "tt0770828".to_string(),
            kind: "movie".to_string(),
            poster: "http://example.com/mos.jpg".to_string(),
        }
    }

    #[test]
    fn test_write_csv_layout() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, [&man_of_steel()]).unwrap();

        assert!(buffer.starts_with(UTF8_BOM));
        let text = String::from_utf8(buffer[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "\"Title\",\"Year\",\"imdbID\",\"Type\",\"Poster\"\n\
             \"Man of Steel\",\"2013\",\"tt0770828\",\"movie\",\"http://example.com/mos.jpg\"\n"
        );
    }

    #[test]
    fn test_write_csv_escapes_quotes_and_commas() {
        let mut movie = man_of_steel();
        movie.title = "Man, \"Steel\"".to_string();

        let mut buffer = Vec::new();
        write_csv(&mut buffer, [&movie]).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("\"Man, \"\"Steel\"\"\""));
    }

    #[test]
    fn test_write_csv_header_only_when_empty() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, std::iter::empty::<&Movie>()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path().join("out"), "movies");

        let path = exporter.export([&man_of_steel()]).unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("movies-"));
        assert!(name.ends_with(".csv"));
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("tt0770828"));
    }
}
