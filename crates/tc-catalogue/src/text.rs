//! Line-oriented input format.
//!
//! # Format
//!
//! ```text
//! 3
//! Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
//! Stop Marushkino: 55.595884, 37.209755
//! Bus 750: Tolstopaltsevo - Marushkino
//! ```
//!
//! | Line                                    | Meaning                         |
//! |-----------------------------------------|---------------------------------|
//! | `Stop NAME: LAT, LNG[, Dm to OTHER]*`   | stop plus directed distances    |
//! | `Bus NAME: A > B > A`                   | roundtrip route, stored as is   |
//! | `Bus NAME: A - B - C`                   | linear route, mirrored on load  |
//! | a bare integer                          | request-count header, skipped   |
//! | blank                                   | skipped                         |
//!
//! Separators may be written with or without surrounding spaces
//! (`A-B-C` == `A - B - C`), so stop names cannot contain `-` or `>`.
//!
//! Lines are converted to [`BaseRequest`]s and loaded with the same
//! three-pass order as JSON input.

use std::collections::BTreeMap;
use std::io::BufRead;

use crate::{BaseRequest, BusRecord, Catalogue, CatalogueError, CatalogueResult, StopRecord, load_base_requests};

/// Parse and load a whole text document.
pub fn load_text<R: BufRead>(reader: R) -> CatalogueResult<Catalogue> {
    let requests = parse_text(reader)?;
    load_base_requests(&requests)
}

/// Parse a text document into base requests without loading them.
pub fn parse_text<R: BufRead>(reader: R) -> CatalogueResult<Vec<BaseRequest>> {
    let mut requests = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.parse::<usize>().is_ok() {
            continue;
        }
        requests.push(parse_base_line(line, i + 1)?);
    }
    Ok(requests)
}

/// Parse one `Stop …` or `Bus …` line.  `line_no` is only used in errors.
pub fn parse_base_line(line: &str, line_no: usize) -> CatalogueResult<BaseRequest> {
    parse_line(line.trim()).map_err(|msg| CatalogueError::Parse(format!("line {line_no}: {msg}")))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_line(line: &str) -> Result<BaseRequest, String> {
    let (head, body) = line
        .split_once(':')
        .ok_or_else(|| format!("missing ':' in {line:?}"))?;
    let (command, name) = head
        .trim()
        .split_once(' ')
        .ok_or_else(|| format!("missing name in {head:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in {head:?}"));
    }

    match command {
        "Stop" => parse_stop(name, body).map(BaseRequest::Stop),
        "Bus" => parse_bus(name, body).map(BaseRequest::Bus),
        other => Err(format!("unknown command {other:?}: expected \"Stop\" or \"Bus\"")),
    }
}

fn parse_stop(name: &str, body: &str) -> Result<StopRecord, String> {
    let mut fields = body.split(',').map(str::trim);
    let latitude = parse_coordinate(fields.next(), "latitude")?;
    let longitude = parse_coordinate(fields.next(), "longitude")?;

    let mut road_distances = BTreeMap::new();
    for field in fields {
        let (metres, to) = field
            .split_once("m to ")
            .ok_or_else(|| format!("invalid distance {field:?}: expected \"<metres>m to <stop>\""))?;
        let metres = metres
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid distance {metres:?}"))?;
        road_distances.insert(to.trim().to_string(), metres);
    }

    Ok(StopRecord {
        name: name.to_string(),
        latitude,
        longitude,
        road_distances,
    })
}

fn parse_coordinate(field: Option<&str>, what: &str) -> Result<f64, String> {
    let field = field.ok_or_else(|| format!("missing {what}"))?;
    field
        .parse::<f64>()
        .map_err(|_| format!("invalid {what} {field:?}"))
}

fn parse_bus(name: &str, body: &str) -> Result<BusRecord, String> {
    let is_roundtrip = body.contains('>');
    let delim = if is_roundtrip { '>' } else { '-' };
    let stops: Vec<String> = body
        .split(delim)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if stops.is_empty() {
        return Err(format!("bus {name:?} lists no stops"));
    }
    Ok(BusRecord {
        name: name.to_string(),
        stops,
        is_roundtrip,
    })
}
