//! The property record parsed from the vendor options dump.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One configurable option from the Highcharts JSON model.
///
/// Field names follow the vendor dump (`returnType`, `fullname`, `parent`,
/// `defaults`, `values`); unknown or legacy fields (`extends`, `isParent`,
/// `seeAlso`, `context`, `demo`, `deprecated` and whatever future dumps add)
/// are accepted and dropped during deserialization. Absent optionals are
/// skipped on serialization, so a surviving record set round-trips through the
/// output file unchanged.
///
/// `full_name` is the dot-qualified path used by every name filter;
/// `name` is only used for sort order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(default)]
    pub name: String,

    #[serde(
        default,
        rename = "returnType",
        skip_serializing_if = "Option::is_none"
    )]
    pub return_type: Option<String>,

    /// Dotted version string the option first appeared in, e.g. "4.1.0".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Dot-qualified path in the option tree, e.g.
    /// "plotOptions.series.label.enabled".
    #[serde(default, rename = "fullname")]
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, rename = "parent", skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,

    /// Vendor products the option applies to, e.g. {"highcharts", "highstock"}.
    /// Missing or empty means the option applies to nothing we care about.
    #[serde(default)]
    pub products: BTreeSet<String>,

    #[serde(
        default,
        rename = "defaults",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<String>,

    #[serde(default, rename = "values", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<String>,
}

/// Sort records ascending by their short `name`.
pub fn sort_by_name(records: &mut [PropertyRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}
