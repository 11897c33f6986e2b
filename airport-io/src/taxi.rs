//! Parsing and formatting for the Taxiing Planner's map and plan files
//!
use airport_ir::{Grid, Terrain};
use airport_taxi::SearchResult;
use airport_utils::{AirportError, AirportResult, Cell};
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug)]
pub struct Instance {
    pub starts: Vec<Cell>,
    pub goals: Vec<Cell>,
    pub grid: Grid,
}

/// Parses a taxiing instance.
pub fn read(path: &Path, text: &str) -> AirportResult<Instance> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());

    let (lineno, first) = lines
        .next()
        .ok_or_else(|| parse_err(path, 0, "empty input"))?;
    let n = first
        .trim()
        .parse::<usize>()
        .map_err(|e| parse_err(path, lineno + 1, format!("invalid aircraft count: {e}")))?;

    let mut starts = Vec::with_capacity(n);
    let mut goals = Vec::with_capacity(n);
    for _ in 0..n {
        let (lineno, line) = lines
            .next()
            .ok_or_else(|| parse_err(path, 0, "missing start/goal line"))?;
        let mut tokens = line.split_whitespace();
        let start = tokens
            .next()
            .ok_or_else(|| parse_err(path, lineno + 1, "missing start position"))
            .and_then(|t| parse_cell(t).map_err(|e| parse_err(path, lineno + 1, e)))?;
        let goal = tokens
            .next()
            .ok_or_else(|| parse_err(path, lineno + 1, "missing goal position"))
            .and_then(|t| parse_cell(t).map_err(|e| parse_err(path, lineno + 1, e)))?;
        starts.push(start);
        goals.push(goal);
    }

    let mut terrain = Vec::new();
    for (lineno, line) in lines {
        let row: Result<Vec<Terrain>, String> = line
            .split(';')
            .map(|code| {
                Terrain::from_code(code.trim())
                    .ok_or_else(|| format!("unknown terrain code: {code}"))
            })
            .collect();
        terrain.push(row.map_err(|e| parse_err(path, lineno + 1, e))?);
    }
    if terrain.is_empty() {
        return Err(parse_err(path, 0, "missing map rows"));
    }

    Ok(Instance {
        starts,
        goals,
        grid: Grid::new(terrain),
    })
}

fn parse_err(path: &Path, line: usize, msg: impl Into<String>) -> AirportError {
    AirportError::Parse {
        path: path.to_path_buf(),
        line,
        msg: msg.into(),
    }
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

/// Formats the plan file: one line per aircraft, alternating
/// position and transition marker.
pub fn write_plan(plan: &[Vec<Cell>]) -> String {
    let mut out = String::new();
    for trajectory in plan {
        let mut parts = Vec::new();
        if let Some(first) = trajectory.first() {
            parts.push(first.to_string());
        }
        for w in trajectory.windows(2) {
            parts.push(marker(w[0], w[1]).to_string());
            parts.push(w[1].to_string());
        }
        let _ = writeln!(out, "{}", parts.join(" "));
    }
    out
}

fn marker(from: Cell, to: Cell) -> char {
    if to.row < from.row {
        '↑'
    } else if to.row > from.row {
        '↓'
    } else if to.col < from.col {
        '←'
    } else if to.col > from.col {
        '→'
    } else {
        'w'
    }
}

/// Formats the statistics file.
pub fn write_stats(result: &SearchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tiempo total: {}s", result.wall_time.as_secs());
    let _ = writeln!(out, "Makespan: {}", result.makespan);
    let _ = writeln!(out, "h inicial: {}", result.h0);
    let _ = writeln!(out, "Nodos expandidos: {}", result.expanded);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn parses_a_small_instance() {
        let text = "\
1
(0,0) (0,2)
B;B;B
";
        let instance = read(&PathBuf::from("map.csv"), text).unwrap();
        assert_eq!(instance.starts, vec![Cell::new(0, 0)]);
        assert_eq!(instance.goals, vec![Cell::new(0, 2)]);
        assert_eq!(instance.grid.cols(), 3);
    }

    #[test]
    fn rejects_unknown_terrain_code() {
        let text = "1\n(0,0) (0,1)\nB;Z\n";
        let err = read(&PathBuf::from("map.csv"), text).unwrap_err();
        assert!(matches!(err, AirportError::Parse { .. }));
    }

    #[test]
    fn formats_plan_with_direction_markers() {
        let plan = vec![vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 1)]];
        let text = write_plan(&plan);
        assert_eq!(text.trim(), "(0,0) → (0,1) w (0,1)");
    }

    #[test]
    fn formats_stats() {
        let result = SearchResult {
            plan: vec![],
            makespan: 3,
            h0: 2,
            expanded: 10,
            wall_time: Duration::from_secs(1),
        };
        let text = write_stats(&result);
        assert!(text.contains("Makespan: 3"));
        assert!(text.contains("h inicial: 2"));
        assert!(text.contains("Nodos expandidos: 10"));
    }
}
