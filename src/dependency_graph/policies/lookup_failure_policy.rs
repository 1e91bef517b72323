use serde::Deserialize;
use std::str::FromStr;

/// LookupFailurePolicy decides what a failed lookup leaves in the graph
///
/// - `Omit`: the package gets no entry; it still shows up as a child of
///   whichever parents declared it.
/// - `RecordEmpty`: the package gets an entry with no dependencies, so it
///   is visible as a node of its own even when nothing depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupFailurePolicy {
    #[default]
    Omit,
    #[serde(rename = "empty")]
    RecordEmpty,
}

impl LookupFailurePolicy {
    /// Returns the entry to record for a failed package, if any
    pub fn entry_for_failure(self) -> Option<Vec<String>> {
        match self {
            LookupFailurePolicy::Omit => None,
            LookupFailurePolicy::RecordEmpty => Some(Vec::new()),
        }
    }
}

impl FromStr for LookupFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "omit" => Ok(LookupFailurePolicy::Omit),
            "empty" | "record-empty" => Ok(LookupFailurePolicy::RecordEmpty),
            _ => Err(format!(
                "Invalid lookup failure policy: {}. Please specify 'omit' or 'empty'",
                s
            )),
        }
    }
}
