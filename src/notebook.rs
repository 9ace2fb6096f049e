use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::model::CellOutputStats;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCell<'a, K> {
    pub rank: K,
    pub index: usize,
    pub cell: &'a Value,
}

pub fn load_notebook(path: &Path) -> Result<Value> {
    if !path.exists() {
        bail!("notebook file not found: {}", path.display());
    }

    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let notebook = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse notebook json {}", path.display()))?;

    Ok(notebook)
}

pub fn notebook_cells(notebook: &Value) -> Result<&Vec<Value>> {
    match notebook.get("cells").and_then(Value::as_array) {
        Some(cells) => Ok(cells),
        None => bail!("invalid notebook format: must be an object with a 'cells' array"),
    }
}

fn notebook_cells_mut(notebook: &mut Value) -> Result<&mut Vec<Value>> {
    match notebook.get_mut("cells").and_then(Value::as_array_mut) {
        Some(cells) => Ok(cells),
        None => bail!("invalid notebook format: must be an object with a 'cells' array"),
    }
}

// Ties keep notebook order in both directions.
pub fn sort_notebook_cells<K, F>(
    notebook: &Value,
    key: F,
    reverse: bool,
) -> Result<Vec<RankedCell<'_, K>>>
where
    K: Ord,
    F: Fn(&Value) -> K,
{
    let mut ranked = notebook_cells(notebook)?
        .iter()
        .enumerate()
        .map(|(index, cell)| RankedCell {
            rank: key(cell),
            index,
            cell,
        })
        .collect::<Vec<_>>();

    if reverse {
        ranked.sort_by(|a, b| b.rank.cmp(&a.rank));
    } else {
        ranked.sort_by(|a, b| a.rank.cmp(&b.rank));
    }

    Ok(ranked)
}

pub fn output_size(cell: &Value) -> usize {
    let Some(outputs) = cell.get("outputs").and_then(Value::as_array) else {
        return 0;
    };

    outputs
        .iter()
        .map(|output| {
            if let Some(text) = output.get("text") {
                return text_length(text);
            }
            output
                .get("data")
                .and_then(Value::as_object)
                .map(|data| data.values().map(text_length).sum::<usize>())
                .unwrap_or(0)
        })
        .sum()
}

fn text_length(value: &Value) -> usize {
    match value {
        Value::String(text) => text.chars().count(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(Value::as_str)
            .map(|part| part.chars().count())
            .sum(),
        _ => 0,
    }
}

fn cell_id(cell: &Value) -> Option<&str> {
    cell.get("id").and_then(Value::as_str)
}

pub fn cells_with_largest_output(notebook: &Value, count: usize) -> Result<Vec<CellOutputStats>> {
    let ranked = sort_notebook_cells(notebook, output_size, true)?;

    Ok(ranked
        .into_iter()
        .take(count)
        .map(|ranked| CellOutputStats {
            id: cell_id(ranked.cell).map(ToOwned::to_owned),
            index: ranked.index,
            output_size: ranked.rank,
        })
        .collect())
}

pub fn clear_outputs_of_cell_ids(notebook: &mut Value, cell_ids: &HashSet<String>) -> Result<usize> {
    let mut cleared = 0;
    for cell in notebook_cells_mut(notebook)? {
        let matches = cell_id(cell).is_some_and(|id| cell_ids.contains(id));
        if !matches {
            continue;
        }
        if let Some(fields) = cell.as_object_mut() {
            fields.insert("outputs".to_string(), Value::Array(Vec::new()));
            cleared += 1;
        }
    }

    Ok(cleared)
}

// Cells without an id are ranked but cannot be cleared.
pub fn clear_outputs_of_largest_output_cells(
    notebook: &mut Value,
    count: usize,
) -> Result<Vec<String>> {
    let cell_ids = cells_with_largest_output(notebook, count)?
        .into_iter()
        .filter_map(|stats| stats.id)
        .collect::<Vec<String>>();

    let id_set = cell_ids.iter().cloned().collect::<HashSet<String>>();
    clear_outputs_of_cell_ids(notebook, &id_set)?;

    Ok(cell_ids)
}
