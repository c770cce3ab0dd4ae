use origin_core::SubmissionRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// One record as sent over the wire: field name to value.
///
/// Unlike [`SubmissionRecord`], a submission may lack fields. Empty CSV cells
/// are dropped rather than sent as `""`, which lets the service reject
/// incomplete rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Submission(BTreeMap<String, String>);

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&SubmissionRecord> for Submission {
    fn from(record: &SubmissionRecord) -> Self {
        Self(
            record
                .iter()
                .map(|(field, value)| (field.name().to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for Submission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
