//! The exclusion rule bank applied to fully qualified property names.

use crate::filter::{Filter, FilterKind};

/// Ordered collection of exclusion filters over fully qualified names.
///
/// The rules are a logical OR: a name is excluded as soon as any one filter
/// matches, so evaluation short-circuits but the result does not depend on
/// order. Banks are built explicitly and passed into the pipeline; there is no
/// process-wide rule state, which lets tests swap in their own bank.
#[derive(Debug, Clone, Default)]
pub struct FilterBank {
    filters: Vec<Filter>,
}

impl FilterBank {
    /// An empty bank that excludes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to the bank.
    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether at least one rule matches `full_name`.
    pub fn matches_any(&self, full_name: &str) -> bool {
        self.filters.iter().any(|f| f.matches(Some(full_name)))
    }

    /// The hand-maintained exclusion list for the host property panels.
    ///
    /// Curated against the upstream options dump: whole namespaces the host
    /// does not expose, subtrees gated behind optional vendor modules, and
    /// chart types the host never implemented. Revisit when the host gains
    /// chart types or the vendor moves options between namespaces.
    pub fn curated() -> Self {
        let mut bank = Self::new();

        // Top-level namespaces with no host counterpart.
        for prefix in [
            "global",
            "lang",
            "accessibility",
            "annotations",
            "boost",
            "data",
            "defs",
            "drilldown",
            "exporting",
            "loading",
            "navigation",
            "noData",
            "pane",
            "responsive",
            "series",
            "time",
            "zAxis",
        ] {
            bank.push(Filter::new(prefix, FilterKind::StartsWith));
        }

        // 3D rendering and parallel-axes options.
        bank.push(Filter::new("chart.options3d", FilterKind::StartsWith));
        bank.push(Filter::new("position3d", FilterKind::EndsWith));
        bank.push(Filter::new(
            "chart.parallelCoordinates",
            FilterKind::StartsWith,
        ));
        bank.push(Filter::new("chart.parallelAxes", FilterKind::StartsWith));

        // Requires the vendor "series-label.js" module.
        for series_type in [
            "area",
            "areaspline",
            "bar",
            "bubble",
            "column",
            "heatmap",
            "line",
            "pie",
            "scatter",
            "series",
            "spline",
            "treemap",
        ] {
            bank.push(Filter::new(
                format!("plotOptions.{series_type}.label"),
                FilterKind::StartsWith,
            ));
        }

        // Chart types the host never implemented.
        for series_type in [
            "areasplinerange",
            "arearange",
            "bellcurve",
            "boxplot",
            "bullet",
            "columnpyramid",
            "columnrange",
            "cylinder",
            "errorbar",
            "funnel",
            "gauge",
            "histogram",
            "networkgraph",
            "packedbubble",
            "pareto",
            "polygon",
            "pyramid",
            "sankey",
            "scatter3d",
            "streamgraph",
            "sunburst",
            "tilemap",
            "variablepie",
            "variwide",
            "vector",
            "venn",
            "waterfall",
            "windbarb",
            "wordcloud",
            "xrange",
        ] {
            bank.push(Filter::new(
                format!("plotOptions.{series_type}"),
                FilterKind::StartsWith,
            ));
        }

        bank
    }
}
