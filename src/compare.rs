//! Tolerance checks of computed values against reference tables.
//!
//! A [`Comparison`] collects per-row absolute differences for a fixed set of
//! named columns, each with its own tolerance, and summarizes them: maximum,
//! RMS, worst row and the number of rows out of tolerance. The check fails if
//! any column's maximum exceeds its tolerance, or if the number of compared
//! rows differs from the number expected.

use anyhow::Result;
use tracing::info;

/// A compared quantity and its tolerance, in the units its differences use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub name: &'static str,
    pub tolerance: f64,
}

impl Column {
    pub const fn new(name: &'static str, tolerance: f64) -> Self {
        Self { name, tolerance }
    }
}

/// Residual statistics for one column.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColumnStats {
    pub max: f64,
    pub rms: f64,
    /// Row index of `max`.
    pub worst_row: usize,
    /// Rows whose difference exceeds the tolerance (or is NaN).
    pub failures: usize,
}

/// Residuals accumulated over the rows of one regression case.
#[derive(Debug, Clone)]
pub struct Comparison {
    name: String,
    columns: Vec<Column>,
    expected_rows: usize,
    rows: usize,
    max: Vec<f64>,
    worst: Vec<usize>,
    sum_sq: Vec<f64>,
    failures: Vec<usize>,
}

impl Comparison {
    pub fn new(name: &str, columns: &[Column], expected_rows: usize) -> Self {
        let n = columns.len();
        Self {
            name: name.to_string(),
            columns: columns.to_vec(),
            expected_rows,
            rows: 0,
            max: vec![0.0; n],
            worst: vec![0; n],
            sum_sq: vec![0.0; n],
            failures: vec![0; n],
        }
    }

    /// Record one row of absolute differences, one per column.
    pub fn add_row(&mut self, diffs: &[f64]) -> Result<()> {
        anyhow::ensure!(
            diffs.len() == self.columns.len(),
            "{}: row {} has {} differences for {} columns",
            self.name,
            self.rows,
            diffs.len(),
            self.columns.len()
        );
        for (i, (&d, col)) in diffs.iter().zip(&self.columns).enumerate() {
            let d = d.abs();
            // A NaN sticks as the maximum once seen
            if !self.max[i].is_nan() && (d.is_nan() || d > self.max[i]) {
                self.max[i] = d;
                self.worst[i] = self.rows;
            }
            self.sum_sq[i] += d * d;
            if !(d <= col.tolerance) {
                self.failures[i] += 1;
            }
        }
        self.rows += 1;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Statistics for every column, in column order.
    pub fn stats(&self) -> Vec<ColumnStats> {
        (0..self.columns.len())
            .map(|i| ColumnStats {
                max: self.max[i],
                rms: if self.rows > 0 {
                    (self.sum_sq[i] / self.rows as f64).sqrt()
                } else {
                    0.0
                },
                worst_row: self.worst[i],
                failures: self.failures[i],
            })
            .collect()
    }

    /// Statistics for the column called `name`.
    pub fn column_stats(&self, name: &str) -> Option<ColumnStats> {
        let i = self.columns.iter().position(|c| c.name == name)?;
        self.stats().get(i).copied()
    }

    /// Log a summary and fail if any column is out of tolerance.
    pub fn check(&self) -> Result<()> {
        anyhow::ensure!(
            self.rows == self.expected_rows,
            "{}: compared {} rows, expected {}",
            self.name,
            self.rows,
            self.expected_rows
        );

        let mut failed = Vec::new();
        for (col, st) in self.columns.iter().zip(self.stats()) {
            info!(
                "{}: {} max {:.3e} (row {}) rms {:.3e} tol {:.1e}",
                self.name, col.name, st.max, st.worst_row, st.rms, col.tolerance
            );
            if st.failures > 0 {
                failed.push(format!(
                    "{} max {:.6e} > {:.1e} at row {} ({} rows out of tolerance)",
                    col.name, st.max, col.tolerance, st.worst_row, st.failures
                ));
            }
        }

        if !failed.is_empty() {
            anyhow::bail!("{}: {}", self.name, failed.join("; "));
        }
        Ok(())
    }
}
