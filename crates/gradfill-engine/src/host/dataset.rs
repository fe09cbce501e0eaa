use std::collections::HashMap;

use serde::Deserialize;

/// One row of a bound data set.
///
/// Fields are exposed as the host's formatted strings; interpretation is up
/// to the control.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// The formatted value of `field`, or `None` if the record has no such column.
    pub fn formatted_value(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// A tabular data source bound to a control.
///
/// Iteration order is the host's sort order, given by `sorted_record_ids`.
/// Ids without a matching record are skipped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSet {
    pub loading: bool,
    pub sorted_record_ids: Vec<String>,
    pub records: HashMap<String, Record>,
}

impl DataSet {
    /// A data set that is still being fetched by the host.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// A loaded data set whose sort order is the order of `rows`.
    pub fn from_records<I, K>(rows: I) -> Self
    where
        I: IntoIterator<Item = (K, Record)>,
        K: Into<String>,
    {
        let mut set = Self::default();
        for (id, record) in rows {
            set.push(id, record);
        }
        set
    }

    /// Appends a record at the end of the sort order, replacing any record
    /// already stored under `id`.
    pub fn push(&mut self, id: impl Into<String>, record: Record) {
        let id = id.into();
        if self.records.insert(id.clone(), record).is_none() {
            self.sorted_record_ids.push(id);
        }
    }

    /// Number of ids in the sort order.
    pub fn len(&self) -> usize {
        self.sorted_record_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted_record_ids.is_empty()
    }

    /// Records paired with their ids, in sort order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> + '_ {
        self.sorted_record_ids
            .iter()
            .filter_map(|id| self.records.get(id).map(|r| (id.as_str(), r)))
    }
}
