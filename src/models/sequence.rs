use crate::models::table::Table;

/// A FASTA entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// First whitespace-delimited token of the header
    pub id: String,
    /// Full header line without the `>` marker
    pub description: String,
    /// Residues with line breaks removed
    pub sequence: String,
}

/// FASTA entries in file order. Ids are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceTable {
    records: Vec<SequenceRecord>,
}

impl SequenceTable {
    /// Column names, in the order used by [`SequenceTable::into_table`].
    pub const COLUMNS: [&'static str; 3] = ["id", "description", "sequence"];

    pub fn new(records: Vec<SequenceRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequenceRecord> {
        self.records.iter()
    }

    /// Record ids in file order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    /// Calculate the total length of all sequences
    pub fn total_length(&self) -> usize {
        self.records.iter().map(|r| r.sequence.len()).sum()
    }

    /// Convert into a generic table with columns `id`, `description`, `sequence`.
    pub fn into_table(self) -> Table {
        let columns = Self::COLUMNS.iter().map(|c| c.to_string()).collect();
        let rows = self
            .records
            .into_iter()
            .map(|r| vec![r.id, r.description, r.sequence])
            .collect();
        Table::new(columns, rows)
    }
}

impl IntoIterator for SequenceTable {
    type Item = SequenceRecord;
    type IntoIter = std::vec::IntoIter<SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a SequenceTable {
    type Item = &'a SequenceRecord;
    type IntoIter = std::slice::Iter<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, sequence: &str) -> SequenceRecord {
        SequenceRecord {
            id: id.to_string(),
            description: format!("{id} some transcript"),
            sequence: sequence.to_string(),
        }
    }

    #[test]
    fn test_total_length() {
        let table = SequenceTable::new(vec![record("seq1", "ACGT"), record("seq2", "TGCA")]);
        assert_eq!(table.total_length(), 8);
        assert_eq!(table.ids().collect::<Vec<_>>(), ["seq1", "seq2"]);
    }

    #[test]
    fn test_into_table() {
        let table = SequenceTable::new(vec![record("seq1", "ACGT")]).into_table();
        assert_eq!(table.columns(), ["id", "description", "sequence"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "description"), Some("seq1 some transcript"));
        assert_eq!(table.get(0, "sequence"), Some("ACGT"));
    }
}
