//! Text file ingestion for both panels.
//!
//! Parsing never fails: lines that are blank, non-numeric, or too short are
//! dropped and the rest are kept in file order. Drop counts are logged at
//! debug level only.
//!
//! Layer files hold `depth density ignore velocity [description]` per line,
//! where the optional description is the rest of the line. Consecutive
//! records pair up into one layer (top record, bottom record) and the layer
//! takes the velocity of its top record. Scatter files hold `velocity, period`
//! per line.

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

use crate::axis::AxisLimits;
use crate::doc::Layer;
use crate::scatter::ScatterPoint;

/// One numeric line of a layer file.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthRecord {
    pub depth: f64,
    pub density: f64,
    /// Third column; carried for completeness, never interpreted.
    pub ignore: f64,
    pub velocity: f64,
    /// Free text after the velocity column, whitespace-normalised. Empty
    /// when absent.
    pub description: String,
}

/// Parse every valid record of a layer file, in order.
#[must_use]
pub fn parse_layer_records(text: &str) -> Vec<DepthRecord> {
    text.lines().filter_map(parse_depth_line).collect()
}

fn parse_depth_line(line: &str) -> Option<DepthRecord> {
    let mut fields = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|f| !f.is_empty());
    let depth = parse_number(fields.next()?)?;
    let density = parse_number(fields.next()?)?;
    let ignore = parse_number(fields.next()?)?;
    let velocity = parse_number(fields.next()?)?;
    let description = fields.collect::<Vec<_>>().join(" ");
    Some(DepthRecord { depth, density, ignore, velocity, description })
}

/// Parse a layer file into layers by pairing consecutive records.
///
/// A trailing unpaired record is dropped, as is any pair whose bottom is not
/// deeper than its top.
#[must_use]
pub fn parse_layer_file(text: &str) -> Vec<Layer> {
    let records = parse_layer_records(text);
    let layers: Vec<Layer> = records
        .chunks_exact(2)
        .filter_map(|pair| {
            let (top, bottom) = (&pair[0], &pair[1]);
            (bottom.depth > top.depth).then(|| Layer::new(top.depth, bottom.depth, top.velocity))
        })
        .collect();

    let total_lines = text.lines().filter(|l| !l.trim().is_empty()).count();
    if total_lines != layers.len() * 2 {
        log::debug!(
            "layer file: {total_lines} non-blank lines, {} records, {} layers",
            records.len(),
            layers.len()
        );
    }
    layers
}

/// Parse a scatter file of `velocity, period` lines.
#[must_use]
pub fn parse_scatter_file(text: &str) -> Vec<ScatterPoint> {
    let points: Vec<ScatterPoint> = text.lines().filter_map(parse_scatter_line).collect();
    log::debug!("scatter file: {} points", points.len());
    points
}

fn parse_scatter_line(line: &str) -> Option<ScatterPoint> {
    let mut fields = line.split(',').map(str::trim);
    let velocity = parse_number(fields.next()?)?;
    let period = parse_number(fields.next()?)?;
    Some(ScatterPoint::new(period, velocity))
}

fn parse_number(field: &str) -> Option<f64> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Suggest axis limits covering every `(x, y)` value, padded on each side by
/// `padding` times the span. Non-finite values are skipped. Returns `None`
/// when either axis has no finite values.
#[must_use]
pub fn suggest_limits(
    xs: impl IntoIterator<Item = f64>,
    ys: impl IntoIterator<Item = f64>,
    padding: f64,
) -> Option<AxisLimits> {
    let (xmin, xmax) = padded(extent(xs.into_iter().filter(|v| v.is_finite()))?, padding);
    let (ymin, ymax) = padded(extent(ys.into_iter().filter(|v| v.is_finite()))?, padding);
    Some(AxisLimits { xmin, xmax, ymin, ymax })
}

#[allow(clippy::float_cmp)]
fn padded((lo, hi): (f64, f64), padding: f64) -> (f64, f64) {
    let span = hi - lo;
    let margin = if span > 0.0 {
        span * padding
    } else if lo != 0.0 && padding > 0.0 {
        lo.abs() * padding
    } else {
        1.0
    };
    (lo - margin, hi + margin)
}

/// Limits for the layer editor: velocity on x, depth on y.
#[must_use]
pub fn layer_limits(layers: &[Layer], padding: f64) -> Option<AxisLimits> {
    suggest_limits(
        layers.iter().map(|l| l.velocity),
        layers.iter().flat_map(|l| [l.start_depth, l.end_depth]),
        padding,
    )
}

/// Limits for the scatter panel: period on x, velocity on y.
#[must_use]
pub fn scatter_limits(points: &[ScatterPoint], padding: f64) -> Option<AxisLimits> {
    suggest_limits(points.iter().map(|p| p.x), points.iter().map(|p| p.y), padding)
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
