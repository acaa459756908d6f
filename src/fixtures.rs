//! Reading regression fixture tables.
//!
//! Fixture files are plain text: one row of whitespace-separated numbers per
//! line, `#` comment lines, blank lines ignored. Reference tables written by
//! SLALIB carry a short `#` header describing how they were produced.
//!
//! The two source tables have fixed layouts, exposed as typed rows:
//!
//! - `ndwfs.txt`: 10 columns of positions (degrees) of NDWFS field sources in
//!   ICRS, FK5, FK4, galactic and ecliptic coordinates.
//! - `hip_full.txt`: 13 columns for Hipparcos stars, adding parallax (mas)
//!   and proper motion (mas/yr, RA component includes cos δ).

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// A rectangular table of numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Source name used in error messages and logs.
    pub name: String,
    ncols: usize,
    rows: Vec<Vec<f64>>,
}

impl Table {
    /// Parse a table from any reader.
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut ncols = 0;
        for result in reader.records() {
            let record = result.with_context(|| format!("Failed to read {name}"))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            // Runs of spaces give empty fields; tabs stay inside a field
            let values = record
                .iter()
                .flat_map(str::split_whitespace)
                .map(|tok| {
                    tok.parse::<f64>().with_context(|| {
                        format!("{name}:{line}: invalid number '{tok}'")
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            if values.is_empty() {
                continue;
            }

            if rows.is_empty() {
                ncols = values.len();
            }
            anyhow::ensure!(
                values.len() == ncols,
                "{name}:{line}: expected {ncols} columns, found {}",
                values.len()
            );
            rows.push(values);
        }

        Ok(Self {
            name: name.to_string(),
            ncols,
            rows,
        })
    }

    /// Read a table from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open fixture file: {}", path.display()))?;
        let table = Self::from_reader(&path.display().to_string(), file)?;
        info!(
            "Loaded {} rows x {} columns from {}",
            table.len(),
            table.ncols(),
            path.display()
        );
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns (0 for an empty table).
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Copy out column `i`.
    pub fn column(&self, i: usize) -> Result<Vec<f64>> {
        anyhow::ensure!(
            i < self.ncols,
            "{}: column {i} out of range ({} columns)",
            self.name,
            self.ncols
        );
        Ok(self.rows.iter().map(|r| r[i]).collect())
    }

    /// Require exactly `ncols` columns.
    pub fn expect_columns(&self, ncols: usize) -> Result<()> {
        anyhow::ensure!(
            self.is_empty() || self.ncols == ncols,
            "{}: expected {ncols} columns, found {}",
            self.name,
            self.ncols
        );
        Ok(())
    }
}

// ── Typed source tables ──

/// One source from `ndwfs.txt`; all values in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdwfsRow {
    /// ICRS right ascension.
    pub racj2: f64,
    /// ICRS declination.
    pub deccj2: f64,
    /// FK5 J2000 right ascension.
    pub raj2: f64,
    /// FK5 J2000 declination.
    pub decj2: f64,
    /// FK4 B1950 right ascension.
    pub rab1: f64,
    /// FK4 B1950 declination.
    pub decb1: f64,
    pub glon: f64,
    pub glat: f64,
    /// Ecliptic longitude, J2000 equinox.
    pub elon2: f64,
    /// Ecliptic latitude, J2000 equinox.
    pub elat2: f64,
}

impl NdwfsRow {
    pub const COLUMNS: usize = 10;

    fn from_values(v: &[f64]) -> Self {
        Self {
            racj2: v[0],
            deccj2: v[1],
            raj2: v[2],
            decj2: v[3],
            rab1: v[4],
            decb1: v[5],
            glon: v[6],
            glat: v[7],
            elon2: v[8],
            elat2: v[9],
        }
    }

    pub fn from_table(table: &Table) -> Result<Vec<Self>> {
        table.expect_columns(Self::COLUMNS)?;
        Ok(table.rows().iter().map(|r| Self::from_values(r)).collect())
    }
}

/// One star from `hip_full.txt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HipRow {
    /// ICRS right ascension (degrees).
    pub ra_icrs: f64,
    /// ICRS declination (degrees).
    pub dec_icrs: f64,
    /// Parallax (mas).
    pub px: f64,
    /// Proper motion in RA, times cos δ (mas/yr).
    pub pma: f64,
    /// Proper motion in Dec (mas/yr).
    pub pmd: f64,
    pub raj2: f64,
    pub decj2: f64,
    pub rab1: f64,
    pub decb1: f64,
    pub glon: f64,
    pub glat: f64,
    pub elon2: f64,
    pub elat2: f64,
}

impl HipRow {
    pub const COLUMNS: usize = 13;

    fn from_values(v: &[f64]) -> Self {
        Self {
            ra_icrs: v[0],
            dec_icrs: v[1],
            px: v[2],
            pma: v[3],
            pmd: v[4],
            raj2: v[5],
            decj2: v[6],
            rab1: v[7],
            decb1: v[8],
            glon: v[9],
            glat: v[10],
            elon2: v[11],
            elat2: v[12],
        }
    }

    pub fn from_table(table: &Table) -> Result<Vec<Self>> {
        table.expect_columns(Self::COLUMNS)?;
        Ok(table.rows().iter().map(|r| Self::from_values(r)).collect())
    }
}

// ── Fixture directory ──

/// A directory of fixture files.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    dir: PathBuf,
}

impl FixtureSet {
    pub const NDWFS: &'static str = "ndwfs.txt";
    pub const HIP: &'static str = "hip_full.txt";

    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Load any table in the set by file name.
    pub fn load(&self, name: &str) -> Result<Table> {
        Table::from_path(self.path(name))
    }

    pub fn ndwfs(&self) -> Result<Vec<NdwfsRow>> {
        NdwfsRow::from_table(&self.load(Self::NDWFS)?)
    }

    pub fn hip(&self) -> Result<Vec<HipRow>> {
        HipRow::from_table(&self.load(Self::HIP)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whitespace_and_comments() {
        let text = "# header line\n# another\n 1.0  2.5 -3\n\n4 5.5   6e-1\n";
        let t = Table::from_reader("inline", text.as_bytes()).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.ncols(), 3);
        assert_eq!(t.row(0).unwrap(), &[1.0, 2.5, -3.0]);
        assert_eq!(t.column(2).unwrap(), vec![-3.0, 0.6]);
        assert!(t.column(3).is_err());
    }

    #[test]
    fn test_tabs_split() {
        let t = Table::from_reader("tabs", "1\t2\t3\n".as_bytes()).unwrap();
        assert_eq!(t.row(0).unwrap(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ragged_row_is_error() {
        let err = Table::from_reader("ragged", "1 2 3\n4 5\n".as_bytes())
            .unwrap_err()
            .to_string();
        assert!(err.contains("ragged"), "{err}");
        assert!(err.contains("expected 3 columns"), "{err}");
    }

    #[test]
    fn test_bad_number_is_error() {
        let err = Table::from_reader("bad", "1 2 x\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("'x'"));
    }

    #[test]
    fn test_typed_rows() {
        let t = Table::from_reader("ndwfs", "0 1 2 3 4 5 6 7 8 9\n".as_bytes()).unwrap();
        let rows = NdwfsRow::from_table(&t).unwrap();
        assert_eq!(rows[0].raj2, 2.0);
        assert_eq!(rows[0].elat2, 9.0);
        assert!(HipRow::from_table(&t).is_err());
    }

    #[test]
    fn test_missing_file() {
        let set = FixtureSet::new("/nonexistent/fixtures");
        let err = set.load("nothing.txt").unwrap_err().to_string();
        assert!(err.contains("nothing.txt"));
    }
}
