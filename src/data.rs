use crate::errors::DriftwatchError;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Owned column major table with named columns.
///
/// This structure holds a dense table of values in a single contiguous memory
/// block in column-major order (Fortran-style), which allows for efficient
/// column slicing. Every cell is an `f64`; cells that could not be parsed as a
/// number are stored as `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    data: Vec<f64>,
    rows: usize,
}

impl Frame {
    /// Create a new Frame from column names and column-major data.
    ///
    /// * `names` - Ordered column names.
    /// * `data` - Cell values in column-major order, `names.len() * rows` long.
    /// * `rows` - Number of rows.
    pub fn new(names: Vec<String>, data: Vec<f64>, rows: usize) -> Self {
        assert_eq!(
            data.len(),
            names.len() * rows,
            "Data length must equal names.len() * rows"
        );
        Frame { names, data, rows }
    }

    /// Load a Frame from a delimited file with a header row.
    ///
    /// Empty and non-numeric cells are loaded as `NaN`. The file is read
    /// whole; there is no schema knowledge at this level.
    ///
    /// * `path` - Path of the file to load.
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Frame, DriftwatchError> {
        let path = path.as_ref();
        let unreadable = |e: &dyn Display| DriftwatchError::UnableToRead(path.display().to_string(), e.to_string());

        let file = File::open(path).map_err(|e| unreadable(&e))?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let names: Vec<String> = csv_reader
            .headers()
            .map_err(|e| unreadable(&e))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
        let mut rows = 0;
        for result in csv_reader.records() {
            let record = result.map_err(|e| unreadable(&e))?;
            for (column, cell) in columns.iter_mut().zip(record.iter()) {
                let value = if cell.is_empty() {
                    f64::NAN
                } else {
                    cell.parse::<f64>().unwrap_or(f64::NAN)
                };
                column.push(value);
            }
            rows += 1;
        }

        // Flatten columns to create column-major data
        let data: Vec<f64> = columns.into_iter().flatten().collect();
        Ok(Frame::new(names, data, rows))
    }

    /// Number of rows in the frame.
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the frame.
    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    /// Ordered column names.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Whether a column with the given name exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Get an entire column by position.
    ///
    /// * `col` - The index of the column to get.
    pub fn get_col(&self, col: usize) -> &[f64] {
        &self.data[col * self.rows..(col + 1) * self.rows]
    }

    /// Get an entire column by name, `None` if no column carries the name.
    /// If a name occurs more than once the first occurrence wins.
    ///
    /// * `name` - The name of the column to get.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names.iter().position(|n| n == name).map(|col| self.get_col(col))
    }
}

impl fmt::Display for Frame {
    /// Format a Frame.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut val = self.names.join(" ");
        val.push('\n');
        for i in 0..self.rows {
            for j in 0..self.n_cols() {
                val.push_str(self.get_col(j)[i].to_string().as_str());
                if j == (self.n_cols() - 1) {
                    val.push('\n');
                } else {
                    val.push(' ');
                }
            }
        }
        write!(f, "{}", val)
    }
}
