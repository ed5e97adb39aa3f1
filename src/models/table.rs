use std::collections::{HashMap, HashSet};

/// Suffixes given to non-key columns present on both sides of a join.
const LEFT_SUFFIX: &str = "_x";
const RIGHT_SUFFIX: &str = "_y";

/// A row-oriented table of string cells with named columns.
///
/// Every row holds exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from column names and rows.
    ///
    /// # Panics
    /// If any row does not have one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        assert!(
            rows.iter().all(|r| r.len() == columns.len()),
            "every row must have {} cells",
            columns.len()
        );
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of a column, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |r| r[idx].as_str()))
    }

    /// Cell at `row` in column `name`.
    pub fn get(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Number of distinct values in a column.
    pub fn distinct_count(&self, name: &str) -> Option<usize> {
        Some(self.column(name)?.collect::<HashSet<_>>().len())
    }

    /// Renames column `from` to `to`. Returns false if `from` does not exist.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(idx) => {
                self.columns[idx] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Relational inner join with `right` on the column `key`.
    ///
    /// Output rows follow this table's row order; a key repeated on either
    /// side yields every matching pair. Output columns are this table's
    /// columns followed by `right`'s columns minus the key. Other column names
    /// found on both sides are suffixed with `_x` (left) and `_y` (right).
    ///
    /// Returns None if either table lacks `key`.
    pub fn inner_join(&self, right: &Table, key: &str) -> Option<Table> {
        let left_key = self.column_index(key)?;
        let right_key = right.column_index(key)?;

        // Build side: key value -> right row indices, in right row order
        let mut index: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, row) in right.rows.iter().enumerate() {
            index.entry(row[right_key].as_str()).or_default().push(i);
        }

        let right_cols: Vec<usize> = (0..right.columns.len())
            .filter(|&i| i != right_key)
            .collect();
        let columns = self.joined_columns(right, key, &right_cols);

        let mut rows = Vec::new();
        for left_row in &self.rows {
            let Some(matches) = index.get(left_row[left_key].as_str()) else {
                continue;
            };
            for &m in matches {
                let right_row = &right.rows[m];
                let mut row = Vec::with_capacity(columns.len());
                row.extend(left_row.iter().cloned());
                row.extend(right_cols.iter().map(|&i| right_row[i].clone()));
                rows.push(row);
            }
        }

        Some(Table { columns, rows })
    }

    fn joined_columns(&self, right: &Table, key: &str, right_cols: &[usize]) -> Vec<String> {
        let left_names: HashSet<&str> = self.columns.iter().map(String::as_str).collect();
        let right_names: HashSet<&str> = right_cols
            .iter()
            .map(|&i| right.columns[i].as_str())
            .collect();
        let clashes = |name: &str| name != key && left_names.contains(name) && right_names.contains(name);

        let left = self.columns.iter().map(|c| {
            if clashes(c.as_str()) {
                format!("{c}{LEFT_SUFFIX}")
            } else {
                c.clone()
            }
        });
        let right = right_cols.iter().map(|&i| {
            let c = &right.columns[i];
            if clashes(c.as_str()) {
                format!("{c}{RIGHT_SUFFIX}")
            } else {
                c.clone()
            }
        });
        left.chain(right).collect()
    }
}
