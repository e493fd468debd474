//! The batch pipeline: load, filter, report, write.
//!
//! Failures never propagate out of [`run`]: every I/O or parse problem is
//! logged and replaced with an empty result so a maintainer run always
//! finishes and always reports what it could. The log stream is the tool's
//! only feedback channel.

use std::path::PathBuf;

use serde_json::Value;

use crate::filter::{EmptyPolicy, Filter, FilterKind};
use crate::loader;
use crate::model::{self, PropertyRecord};
use crate::rules::FilterBank;
use crate::scan;

/// The product whose property panel consumes the output. Records not scoped
/// to it are never interesting, whatever their name.
pub const HOST_PRODUCT: &str = "highcharts";

/// Parameters of one batch run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Model source: file path or URL. `None` uses the bundled snapshot.
    pub source: Option<String>,
    /// Highest "since" version to keep, compared lexicographically.
    pub max_version: String,
    /// Destination for the pruned record list; overwritten if present.
    pub output: PathBuf,
    /// Pretty-print the output JSON.
    pub pretty: bool,
}

/// Keep records whose `since` version does not exceed `ceiling`.
///
/// Records without a `since` are treated as always available and kept. The
/// comparison is lexicographic, matching the rest of the filter machinery
/// (see [`FilterKind`]); ceilings with multi-digit segments behave
/// accordingly.
pub fn filter_by_max_version(
    records: Vec<PropertyRecord>,
    ceiling: &str,
) -> Vec<PropertyRecord> {
    let filter = Filter::with_empty_policy(ceiling, FilterKind::LessOrEqual, EmptyPolicy::Pass);
    records
        .into_iter()
        .filter(|r| filter.matches(r.since.as_deref()))
        .collect()
}

/// Keep records useful to the host property panel.
///
/// A record survives iff its product set contains [`HOST_PRODUCT`] and its
/// fully qualified name falls outside every excluded namespace in `bank`.
/// An absent or empty product set fails closed; that is what drops the long
/// tail of sibling-product-only options.
pub fn filter_useful(records: Vec<PropertyRecord>, bank: &FilterBank) -> Vec<PropertyRecord> {
    records
        .into_iter()
        .filter(|r| r.products.contains(HOST_PRODUCT) && !bank.matches_any(&r.full_name))
        .collect()
}

/// The sorted set of distinct non-empty return types across `records`.
///
/// Diagnostic report only; has no effect on the output artifact.
pub fn collect_return_types(records: &[PropertyRecord]) -> Vec<String> {
    let types: std::collections::BTreeSet<&str> = records
        .iter()
        .filter_map(|r| r.return_type.as_deref())
        .filter(|rt| !rt.is_empty())
        .collect();
    types.into_iter().map(String::from).collect()
}

/// Execute one batch run and return the surviving records.
///
/// Load and parse failures degrade to an empty record set; a write failure
/// loses the artifact but not the returned in-memory result. Everything is
/// reported through the `log` facade.
pub fn run(options: &RunOptions, bank: &FilterBank) -> Vec<PropertyRecord> {
    let model = load_or_empty(options.source.as_deref());

    report_attribute_names(&model);

    let mut records = match loader::parse_records(&model) {
        Ok(records) => records,
        Err(err) => {
            log::error!("could not parse property records: {err}");
            Vec::new()
        }
    };
    model::sort_by_name(&mut records);
    log::info!("parsed {} property records", records.len());

    let records = filter_useful(records, bank);
    let records = filter_by_max_version(records, &options.max_version);
    log::info!(
        "{} records survive filtering (version ceiling {})",
        records.len(),
        options.max_version
    );

    for return_type in collect_return_types(&records) {
        log::info!("return type: {return_type}");
    }

    if let Err(err) = loader::write_records(&records, &options.output, options.pretty) {
        log::error!("could not write output: {err}");
    }

    records
}

fn load_or_empty(source: Option<&str>) -> Value {
    match loader::load_model(source) {
        Ok(model) => model,
        Err(err) => {
            log::error!("could not load options model: {err}");
            Value::Array(Vec::new())
        }
    }
}

fn report_attribute_names(model: &Value) {
    let names = scan::list_attribute_names(model);
    if names.is_empty() {
        log::warn!("no attributes found scanning the options model");
        return;
    }
    log::info!("attribute names (watch for nested objects, review the list):");
    for name in names {
        log::info!("  {name}");
    }
}
