//! Parsing and formatting for the Maintenance Scheduler's instance and
//! solution files.
use airport_csp::{Aircraft, AircraftKind, Solution};
use airport_ir::{Domain, PositionKind};
use airport_utils::{AirportError, AirportResult, Cell};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::Path;

/// A fully parsed maintenance instance, ready to build a `Scheduler` from.
#[derive(Debug)]
pub struct Instance {
    pub slots: usize,
    pub rows: usize,
    pub cols: usize,
    pub domain: Domain,
    pub aircraft: Vec<Aircraft>,
}

/// Parses a maintenance instance.
pub fn read(path: &Path, text: &str) -> AirportResult<Instance> {
    let mut slots = None;
    let mut dims = None;
    let mut std = Vec::new();
    let mut spc = Vec::new();
    let mut prk = Vec::new();
    let mut aircraft = Vec::new();
    let mut ids = HashSet::new();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = lineno + 1;
        let fail = |msg: String| -> AirportError {
            AirportError::Parse {
                path: path.to_path_buf(),
                line: lineno,
                msg,
            }
        };

        if let Some(rest) = line.strip_prefix("Franjas:") {
            slots = Some(
                rest.trim()
                    .parse::<usize>()
                    .map_err(|e| fail(format!("invalid slot count: {e}")))?,
            );
        } else if let Some(rest) = line.strip_prefix("STD:") {
            std = parse_cells(rest).map_err(&fail)?;
        } else if let Some(rest) = line.strip_prefix("SPC:") {
            spc = parse_cells(rest).map_err(&fail)?;
        } else if let Some(rest) = line.strip_prefix("PRK:") {
            prk = parse_cells(rest).map_err(&fail)?;
        } else if dims.is_none() && line.contains('x') {
            let (r, c) = line
                .split_once('x')
                .ok_or_else(|| fail("malformed grid dimensions".into()))?;
            let rows = r
                .trim()
                .parse::<usize>()
                .map_err(|e| fail(format!("invalid row count: {e}")))?;
            let cols = c
                .trim()
                .parse::<usize>()
                .map_err(|e| fail(format!("invalid col count: {e}")))?;
            dims = Some((rows, cols));
        } else {
            let plane = parse_aircraft(line).map_err(&fail)?;
            if !ids.insert(plane.id.clone()) {
                return Err(fail(format!("duplicate aircraft id: {}", plane.id)));
            }
            aircraft.push(plane);
        }
    }

    let slots = slots.ok_or_else(|| AirportError::Parse {
        path: path.to_path_buf(),
        line: 0,
        msg: "missing Franjas line".into(),
    })?;
    let (rows, cols) = dims.ok_or_else(|| AirportError::Parse {
        path: path.to_path_buf(),
        line: 0,
        msg: "missing RxC grid dimensions line".into(),
    })?;
    let domain = Domain::new(std, spc, prk)?;

    Ok(Instance {
        slots,
        rows,
        cols,
        domain,
        aircraft,
    })
}

fn parse_cells(rest: &str) -> Result<Vec<Cell>, String> {
    rest.split_whitespace().map(parse_cell).collect()
}

fn parse_cell(token: &str) -> Result<Cell, String> {
    let inner = token
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("malformed cell literal: {token}"))?;
    let (r, c) = inner
        .split_once(',')
        .ok_or_else(|| format!("malformed cell literal: {token}"))?;
    let row = r
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid row in {token}: {e}"))?;
    let col = c
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid col in {token}: {e}"))?;
    Ok(Cell::new(row, col))
}

fn parse_aircraft(line: &str) -> Result<Aircraft, String> {
    let fields: Vec<&str> = line.split('-').collect();
    let [id, kind, strict, t1, t2] = fields.as_slice() else {
        return Err(format!("malformed aircraft line: {line}"));
    };
    let kind = match *kind {
        "JMB" => AircraftKind::Jmb,
        "STD" => AircraftKind::Std,
        other => return Err(format!("unknown aircraft kind: {other}")),
    };
    let strict_order = match *strict {
        "T" => true,
        "F" => false,
        other => return Err(format!("unknown strict-order flag: {other}")),
    };
    let t1 = t1
        .parse::<u32>()
        .map_err(|e| format!("invalid t1 task count: {e}"))?;
    let t2 = t2
        .parse::<u32>()
        .map_err(|e| format!("invalid t2 task count: {e}"))?;
    Ok(Aircraft::new(*id, kind, strict_order, t1, t2))
}

/// Formats every enumerated solution in a CSV-like layout.
pub fn write(aircraft: &[Aircraft], domain: &Domain, solutions: &[Solution]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "N. Sol: {}", solutions.len());
    for (i, solution) in solutions.iter().enumerate() {
        let _ = writeln!(out, "Solución {}:", i + 1);
        for (a, positions) in aircraft.iter().zip(solution) {
            let kind = match a.kind {
                AircraftKind::Jmb => "JMB",
                AircraftKind::Std => "STD",
            };
            let strict = if a.strict_order { "T" } else { "F" };
            let cells = positions
                .iter()
                .map(|&c| format!("{}{c}", kind_tag(domain, c)))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "{}-{}-{}-{}-{}: {}",
                a.id, kind, strict, a.t1, a.t2, cells
            );
        }
    }
    out
}

fn kind_tag(domain: &Domain, c: Cell) -> &'static str {
    match domain.kind(c) {
        Some(PositionKind::Std) => "STD",
        Some(PositionKind::Spc) => "SPC",
        Some(PositionKind::Prk) => "PRK",
        None => "??",
    }
}
