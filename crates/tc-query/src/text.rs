//! Line-oriented request processing.
//!
//! # Input
//!
//! ```text
//! 2                                         ← number of base lines
//! Stop A: 55.611087, 37.20829, 3000m to B
//! Stop B: 55.595884, 37.209755
//! 3                                         ← number of stat lines
//! Bus 256
//! Stop A
//! Stop Nowhere
//! ```
//!
//! Base lines use the format of [`tc_catalogue::text`].
//!
//! # Output
//!
//! ```text
//! Bus 256: 4 stops on route, 3 unique stops, 17100 route length, 0.915331 curvature
//! Stop A: buses 256 828
//! Stop Nowhere: not found
//! ```
//!
//! A stop no bus serves prints `no buses`.  Curvature is printed with six
//! significant digits and left out for a route of zero geographic length.

use std::io::{BufRead, Write};

use tc_catalogue::{Catalogue, load_base_requests, parse_base_line};

use crate::{QueryError, QueryResult};

/// Read a whole text document from `reader` and write one answer line per
/// stat line to `writer`.
pub fn process_text<R: BufRead, W: Write>(reader: R, mut writer: W) -> QueryResult<()> {
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    let mut numbered = lines
        .iter()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let base_count = next_count(&mut numbered)?.unwrap_or(0);
    let mut base = Vec::with_capacity(base_count);
    for _ in 0..base_count {
        let (no, line) = numbered
            .next()
            .ok_or_else(|| QueryError::Parse(format!("expected {base_count} base lines")))?;
        base.push(parse_base_line(line, no)?);
    }
    let catalogue = load_base_requests(&base)?;

    let stat_count = next_count(&mut numbered)?.unwrap_or(0);
    for _ in 0..stat_count {
        let (no, line) = numbered
            .next()
            .ok_or_else(|| QueryError::Parse(format!("expected {stat_count} stat lines")))?;
        writeln!(writer, "{}", answer_line(&catalogue, line, no)?)?;
    }
    Ok(())
}

fn next_count<'l, I>(lines: &mut I) -> QueryResult<Option<usize>>
where
    I: Iterator<Item = (usize, &'l str)>,
{
    match lines.next() {
        None => Ok(None),
        Some((no, line)) => line
            .parse::<usize>()
            .map(Some)
            .map_err(|_| QueryError::Parse(format!("line {no}: expected a line count, got {line:?}"))),
    }
}

fn answer_line(catalogue: &Catalogue, line: &str, no: usize) -> QueryResult<String> {
    let (command, name) = line
        .split_once(' ')
        .map(|(c, n)| (c, n.trim()))
        .ok_or_else(|| QueryError::Parse(format!("line {no}: expected \"Bus NAME\" or \"Stop NAME\"")))?;

    match command {
        "Bus" => Ok(match catalogue.bus_stats_by_name(name) {
            None => format!("Bus {name}: not found"),
            Some(stats) => {
                let mut out = format!(
                    "Bus {name}: {} stops on route, {} unique stops, {} route length",
                    stats.stop_count, stats.unique_stop_count, stats.route_length,
                );
                if let Some(c) = stats.curvature {
                    out.push_str(&format!(", {} curvature", format_significant(c, 6)));
                }
                out
            }
        }),
        "Stop" => Ok(match catalogue.bus_names_for_stop(name) {
            None => format!("Stop {name}: not found"),
            Some(buses) if buses.is_empty() => format!("Stop {name}: no buses"),
            Some(buses) => format!("Stop {name}: buses {}", buses.join(" ")),
        }),
        other => Err(QueryError::Parse(format!("line {no}: unknown query {other:?}"))),
    }
}

/// Format `x` with `digits` significant digits, trailing zeros removed.
pub(crate) fn format_significant(x: f64, digits: i32) -> String {
    if x == 0.0 || !x.is_finite() {
        return x.to_string();
    }
    let magnitude = x.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    let s = format!("{x:.decimals$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
