/*!
 * Process File Loader
 * Parse process tables from CSV or whitespace-separated text
 *
 * Format:
 * - First line is a header and is always skipped
 * - Blank lines and lines starting with '#' are ignored
 * - Rows are `id,arrival,burst[,priority]` or `id arrival burst [priority]`
 */

use super::registry::ProcessRegistry;
use super::types::ProcessDescriptor;
use crate::core::errors::SchedulerError;
use crate::core::types::{SchedulerResult, DEFAULT_PRIORITY};
use std::path::Path;
use tracing::info;

/// Load and validate a process file
pub fn load_from_file(path: impl AsRef<Path>) -> SchedulerResult<ProcessRegistry> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| SchedulerError::Io(format!("cannot read {}: {}", path.display(), e)))?;

    let registry = ProcessRegistry::new(parse_table(&text)?)?;
    info!(path = %path.display(), count = registry.len(), "Loaded processes");
    Ok(registry)
}

/// Parse a whole table, header included
pub fn parse_table(text: &str) -> SchedulerResult<Vec<ProcessDescriptor>> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| parse_row(idx + 1, line))
        .collect()
}

/// Parse a single `id,arrival,burst[,priority]` row (no header)
pub fn parse_process(row: &str) -> SchedulerResult<ProcessDescriptor> {
    parse_row(1, row)
}

fn parse_row(line: usize, row: &str) -> SchedulerResult<ProcessDescriptor> {
    let fields: Vec<&str> = if row.contains(',') {
        row.split(',').map(str::trim).collect()
    } else {
        row.split_whitespace().collect()
    };

    if fields.len() != 3 && fields.len() != 4 {
        return Err(SchedulerError::Parse {
            line,
            reason: format!("expected 3 or 4 fields, found {}", fields.len()),
        });
    }

    let field = |i: usize, name: &str| -> SchedulerResult<i64> {
        fields[i].parse::<i64>().map_err(|_| SchedulerError::Parse {
            line,
            reason: format!("{} '{}' is not an integer", name, fields[i]),
        })
    };

    let id = field(0, "id")?;
    let id = u32::try_from(id).map_err(|_| SchedulerError::Parse {
        line,
        reason: format!("id {} out of range", id),
    })?;
    let arrival = field(1, "arrival")?;
    let burst = field(2, "burst")?;
    let priority = match fields.get(3) {
        Some(_) => {
            let raw = field(3, "priority")?;
            i32::try_from(raw).map_err(|_| SchedulerError::Parse {
                line,
                reason: format!("priority {} out of range", raw),
            })?
        }
        None => DEFAULT_PRIORITY,
    };

    Ok(ProcessDescriptor::new(id, arrival, burst).with_priority(priority))
}
