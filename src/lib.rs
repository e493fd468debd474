//! Highcharts options model pruner
//!
//! Batch transform over the vendor-supplied Highcharts options JSON dump:
//! every object becomes a [`PropertyRecord`], two orthogonal filtering passes
//! drop what the host property panel cannot use, and the survivors are
//! written back out as JSON along with maintainer reports (distinct return
//! types, distinct attribute names).
//!
//! # Example
//!
//! ```
//! use hc_options::{filter_useful, FilterBank, PropertyRecord};
//!
//! let records: Vec<PropertyRecord> = serde_json::from_str(
//!     r#"[
//!         {"name": "type", "fullname": "chart.type", "products": ["highcharts"]},
//!         {"name": "useUTC", "fullname": "global.useUTC", "products": ["highcharts"]},
//!         {"name": "rangeSelector", "fullname": "rangeSelector", "products": ["highstock"]}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let kept = filter_useful(records, &FilterBank::curated());
//!
//! // "global.*" is an excluded namespace and highstock-only records are
//! // out of scope; only chart.type survives.
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].full_name, "chart.type");
//! ```
//!
//! # Filtering passes
//!
//! | Pass | Drops |
//! |------|-------|
//! | usefulness | records not scoped to `"highcharts"`, and names inside any curated excluded namespace |
//! | version ceiling | records whose `since` sorts after the pinned version (lexicographically) |
//!
//! Version comparison is byte-wise lexicographic, never numeric; see
//! [`FilterKind`] for why that quirk is kept.

mod error;
mod filter;
mod loader;
mod model;
mod pipeline;
mod rules;
mod scan;

pub use error::{LoadError, WriteError};
pub use filter::{EmptyPolicy, Filter, FilterKind};
pub use loader::{
    is_url, load_model, load_model_file, load_model_str, load_model_url, parse_records,
    write_records,
};
pub use model::{sort_by_name, PropertyRecord};
pub use pipeline::{
    collect_return_types, filter_by_max_version, filter_useful, run, RunOptions, HOST_PRODUCT,
};
pub use rules::FilterBank;
pub use scan::list_attribute_names;
