//! Records and row collections.

use indexmap::IndexMap;

use crate::value::Value;

/// An insertion-ordered mapping of column name to value.
///
/// Column order is semantically load-bearing: the column list and the
/// placeholder list of an insert are both derived from the same record, so
/// iteration order must be stable for them to stay positionally aligned.
pub type Record = IndexMap<String, Value>;

/// One record, or an ordered sequence of records.
///
/// The single-versus-many distinction is explicit rather than sniffed from
/// the input's shape, and it is preserved end to end: a single row fed
/// through the pipeline yields a single record back.
#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Exactly one record.
    Single(Record),
    /// An ordered sequence of records sharing one column set.
    Many(Vec<Record>),
}

impl Rows {
    /// Returns the record whose key set defines the column list.
    ///
    /// For a sequence this is the first record. All rows sharing its column
    /// set is a caller contract and is not validated here.
    #[must_use]
    pub fn first_record(&self) -> Option<&Record> {
        match self {
            Self::Single(record) => Some(record),
            Self::Many(records) => records.first(),
        }
    }

    /// Iterates over every record.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        match self {
            Self::Single(record) => std::slice::from_ref(record).iter(),
            Self::Many(records) => records.iter(),
        }
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    /// Returns true when there is no record at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Many(records) if records.is_empty())
    }
}

impl From<Record> for Rows {
    fn from(record: Record) -> Self {
        Self::Single(record)
    }
}

impl From<Vec<Record>> for Rows {
    fn from(records: Vec<Record>) -> Self {
        Self::Many(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (String::from(*k), v.clone()))
            .collect()
    }

    #[test]
    fn test_first_record() {
        let single = Rows::Single(record(&[("id", Value::Int(1))]));
        assert_eq!(single.first_record().map(IndexMap::len), Some(1));

        let many = Rows::Many(vec![
            record(&[("id", Value::Int(1))]),
            record(&[("id", Value::Int(2))]),
        ]);
        assert_eq!(
            many.first_record().and_then(|r| r.get("id")),
            Some(&Value::Int(1))
        );

        assert_eq!(Rows::Many(vec![]).first_record(), None);
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(Rows::Single(Record::new()).len(), 1);
        assert!(!Rows::Single(Record::new()).is_empty());
        assert!(Rows::Many(vec![]).is_empty());
    }
}
