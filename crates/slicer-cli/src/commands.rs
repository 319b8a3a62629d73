//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::json;
use slicer_codec::{apply_filter, common_level, extract_filter_target, parse_filter};
use slicer_model::{
    AppliedFilter, CategoryColumn, FilterAction, FilterTarget, HierarchyDataPoint, SlicerHost,
    TupleFilter, VisualMetadata,
};

use crate::cli::{DecodeArgs, EncodeArgs, TargetsArgs};

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let metadata: VisualMetadata = load(&args.metadata, "metadata")?;
    let filters: Option<Vec<AppliedFilter>> = match &args.filters {
        Some(path) => Some(load(path, "filters")?),
        None => None,
    };
    let legacy = args.legacy.clone().or_else(|| stored_legacy(&metadata));
    let targets = column_targets(&metadata);
    let tuples = parse_filter(
        filters.as_deref(),
        &targets,
        &metadata,
        legacy.as_deref(),
    );
    println!("{}", serde_json::to_string_pretty(&tuples)?);
    Ok(())
}

pub fn run_targets(args: &TargetsArgs) -> Result<()> {
    let metadata: VisualMetadata = load(&args.metadata, "metadata")?;
    let targets = column_targets(&metadata);
    println!("{}", serde_json::to_string_pretty(&targets)?);
    Ok(())
}

pub fn run_encode(args: &EncodeArgs) -> Result<()> {
    let metadata: VisualMetadata = load(&args.metadata, "metadata")?;
    let tree: Vec<HierarchyDataPoint> = load(&args.tree, "tree")?;
    let targets = column_targets(&metadata);
    let levels = args.levels.unwrap_or_else(|| common_level(&tree));
    tracing::debug!(levels, points = tree.len(), "encoding selection tree");

    let mut host = DryRunHost::default();
    let filter = apply_filter(&mut host, &tree, &targets, levels)?;
    let report = json!({
        "levels": levels,
        "filter": filter,
        "hostCalls": host.calls,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {what} from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {what} from {}", path.display()))
}

fn stored_legacy(metadata: &VisualMetadata) -> Option<String> {
    metadata
        .objects
        .as_ref()?
        .general
        .as_ref()?
        .filter_values
        .clone()
}

/// One filter target per metadata column, positionally aligned with tree
/// depth.
fn column_targets(metadata: &VisualMetadata) -> Vec<FilterTarget> {
    metadata
        .columns
        .iter()
        .map(|column| {
            extract_filter_target(&CategoryColumn {
                expr: column.expr.clone(),
                ..CategoryColumn::default()
            })
        })
        .collect()
}

/// Records the calls a real host would receive instead of issuing them.
#[derive(Default)]
struct DryRunHost {
    calls: Vec<serde_json::Value>,
}

impl SlicerHost for DryRunHost {
    fn remove_properties(&mut self, object_name: &str, property_name: &str) -> slicer_model::Result<()> {
        self.calls.push(json!({
            "call": "removeProperties",
            "object": object_name,
            "property": property_name,
        }));
        Ok(())
    }

    fn apply_json_filter(
        &mut self,
        filters: &[TupleFilter],
        object_name: &str,
        property_name: &str,
        action: FilterAction,
    ) -> slicer_model::Result<()> {
        self.calls.push(json!({
            "call": "applyJsonFilter",
            "object": object_name,
            "property": property_name,
            "action": action,
            "filters": filters,
        }));
        Ok(())
    }
}
