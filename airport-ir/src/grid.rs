use airport_utils::Cell;
use petgraph::graphmap::UnGraphMap;

/// The movement restriction carried by a grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Terrain {
    /// Traversable; an aircraft may also wait here.
    Free,
    /// Traversable, but no aircraft may wait here between ticks.
    NoWait,
    /// Not traversable at all.
    Blocked,
}

impl Terrain {
    /// Parses the single-letter colors used by the taxiing input format:
    /// `B` (free), `A` (no-wait), `G` (blocked).
    pub fn from_code(code: &str) -> Option<Terrain> {
        match code {
            "B" => Some(Terrain::Free),
            "A" => Some(Terrain::NoWait),
            "G" => Some(Terrain::Blocked),
            _ => None,
        }
    }
}

/// A finite rectangular grid of [`Terrain`].
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    terrain: Vec<Terrain>,
}

impl Grid {
    pub fn new(terrain: Vec<Vec<Terrain>>) -> Self {
        let rows = terrain.len();
        let cols = terrain.first().map_or(0, |r| r.len());
        let flat = terrain.into_iter().flatten().collect();
        Grid {
            rows,
            cols,
            terrain: flat,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, c: Cell) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    pub fn terrain(&self, c: Cell) -> Terrain {
        assert!(self.in_bounds(c), "cell {c} out of bounds");
        self.terrain[c.row * self.cols + c.col]
    }

    /// True iff the cell can be entered or passed through.
    pub fn is_traversable(&self, c: Cell) -> bool {
        self.in_bounds(c) && !matches!(self.terrain(c), Terrain::Blocked)
    }

    /// True iff an aircraft may stay put on this cell for a tick.
    pub fn can_wait(&self, c: Cell) -> bool {
        self.in_bounds(c) && matches!(self.terrain(c), Terrain::Free)
    }

    /// Lazily enumerates the in-bounds, traversable 4-connected neighbours
    /// of `c`.
    pub fn neighbours4(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        c.raw_neighbours4()
            .into_iter()
            .flatten()
            .filter(move |&n| self.is_traversable(n))
    }

    /// Builds an undirected adjacency graph over every traversable cell,
    /// for use by BFS-based heuristics and reachability queries.
    pub fn adjacency_graph(&self) -> UnGraphMap<Cell, ()> {
        let mut graph = UnGraphMap::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = Cell::new(row, col);
                if !self.is_traversable(c) {
                    continue;
                }
                graph.add_node(c);
                for n in self.neighbours4(c) {
                    graph.add_edge(c, n, ());
                }
            }
        }
        graph
    }
}
