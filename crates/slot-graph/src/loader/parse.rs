//! Line parsers for node and arc files.

use crate::error::{GraphError, GraphResult};
use crate::graph::NodeIndex;

use super::Waypoint;

/// One line of an arc file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRecord {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub weight: f64,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// Parse `name x y` lines.
pub fn parse_nodes(text: &str, source_name: &str) -> GraphResult<Vec<Waypoint>> {
    records(text)
        .map(|(line, fields)| {
            let [name, x, y] = expect_fields(fields, source_name, line)?;
            Ok(Waypoint {
                name: name.to_string(),
                x: parse_coordinate(x, "x", source_name, line)?,
                y: parse_coordinate(y, "y", source_name, line)?,
            })
        })
        .collect()
}

/// Parse `from to weight` lines.
pub fn parse_arcs(text: &str, source_name: &str) -> GraphResult<Vec<ArcRecord>> {
    records(text)
        .map(|(line, fields)| {
            let [from, to, weight] = expect_fields(fields, source_name, line)?;
            Ok(ArcRecord {
                from: parse_field(from, "from", source_name, line)?,
                to: parse_field(to, "to", source_name, line)?,
                weight: parse_field(weight, "weight", source_name, line)?,
                line,
            })
        })
        .collect()
}

/// Non-blank, non-comment lines split on whitespace, with 1-based numbers.
fn records(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| (number, line.split_whitespace().collect()))
}

fn expect_fields<'a>(
    fields: Vec<&'a str>,
    source_name: &str,
    line: usize,
) -> GraphResult<[&'a str; 3]> {
    let found = fields.len();
    fields.try_into().map_err(|_| GraphError::Parse {
        source_name: source_name.to_string(),
        line,
        details: format!("expected 3 fields, found {}", found),
    })
}

/// A finite `f64`; `NaN` and infinities parse but are rejected.
fn parse_coordinate(raw: &str, field: &str, source_name: &str, line: usize) -> GraphResult<f64> {
    let value: f64 = parse_field(raw, field, source_name, line)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GraphError::Parse {
            source_name: source_name.to_string(),
            line,
            details: format!("{} must be finite, got '{}'", field, raw),
        })
    }
}

fn parse_field<V>(raw: &str, field: &str, source_name: &str, line: usize) -> GraphResult<V>
where
    V: std::str::FromStr,
    V::Err: std::fmt::Display,
{
    raw.parse().map_err(|err: V::Err| GraphError::Parse {
        source_name: source_name.to_string(),
        line,
        details: format!("invalid {} '{}': {}", field, raw, err),
    })
}
