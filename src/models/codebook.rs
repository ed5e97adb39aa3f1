/// One target's barcode assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeRecord {
    /// Target identifier, usually a gene or transcript name
    pub name: String,
    /// Barcode id
    pub id: String,
    /// Literal barcode, e.g. a bit string such as `0010100011`
    pub barcode_str: String,
}

/// Barcode records in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarcodeTable {
    records: Vec<BarcodeRecord>,
}

impl BarcodeTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[BarcodeRecord] {
        &self.records
    }

    pub(crate) fn push(&mut self, record: BarcodeRecord) {
        self.records.push(record);
    }
}

impl<'a> IntoIterator for &'a BarcodeTable {
    type Item = &'a BarcodeRecord;
    type IntoIter = std::slice::Iter<'a, BarcodeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A MERlin-style codebook: header metadata plus the barcode table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codebook {
    pub version: String,
    pub codebook_name: String,
    /// One name per encoding bit, in header column order
    pub bit_names: Vec<String>,
    pub barcodes: BarcodeTable,
}

impl Codebook {
    /// Number of encoding bits declared in the header.
    pub fn bit_count(&self) -> usize {
        self.bit_names.len()
    }

    /// Split into `(version, codebook_name, bit_names, barcodes)`.
    pub fn into_parts(self) -> (String, String, Vec<String>, BarcodeTable) {
        (self.version, self.codebook_name, self.bit_names, self.barcodes)
    }
}
