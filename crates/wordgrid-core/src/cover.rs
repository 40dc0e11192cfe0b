use std::time::Instant;

/// Caps on the exact-cover enumeration. All default to unbounded, in
/// which case the search is exhaustive.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLimits {
    /// Stop after this many complete covers have been recorded.
    pub max_solutions: Option<usize>,
    /// Stop after this many search-tree nodes have been expanded.
    pub max_nodes: Option<u64>,
    /// Stop when this instant passes.
    pub deadline: Option<Instant>,
}

/// Outcome of an exact-cover enumeration.
#[derive(Debug, Clone)]
pub struct CoverResult {
    /// Each cover is the list of selected row indices, in selection order.
    pub covers: Vec<Vec<usize>>,
    /// Whether a limit stopped the search before all branches were
    /// exhausted. When false the cover list is complete.
    pub truncated: bool,
    /// Search-tree nodes expanded.
    pub nodes: u64,
}

const BLOCK_BITS: usize = 64;

fn blocks_for(universe: usize) -> usize {
    universe.div_ceil(BLOCK_BITS)
}

fn set_bit(bits: &mut [u64], index: usize) {
    bits[index / BLOCK_BITS] |= 1 << (index % BLOCK_BITS);
}

fn test_bit(bits: &[u64], index: usize) -> bool {
    bits[index / BLOCK_BITS] & (1 << (index % BLOCK_BITS)) != 0
}

fn intersects(a: &[u64], b: &[u64]) -> bool {
    a.iter().zip(b).any(|(x, y)| x & y != 0)
}

/// Backtracking exact-cover search over bitset rows.
///
/// Enumerates every way to select a subset of rows such that each element
/// of the universe `0..universe` is covered by exactly one selected row.
/// Each step picks the uncovered element with the fewest remaining
/// candidate rows, dead-ends immediately when that count is zero, and
/// covers/uncovers with a trail so backtracking is proportional to the
/// work undone.
struct CoverSearch<'a> {
    rows: &'a [Vec<usize>],
    row_bits: Vec<Vec<u64>>,
    /// Rows covering each universe element, ascending row index.
    element_rows: Vec<Vec<usize>>,
    active: Vec<bool>,
    uncovered: Vec<u64>,
    universe: usize,
    limits: SearchLimits,
    nodes: u64,
    truncated: bool,
}

impl<'a> CoverSearch<'a> {
    fn new(rows: &'a [Vec<usize>], universe: usize, limits: SearchLimits) -> Self {
        let blocks = blocks_for(universe);
        let mut row_bits = Vec::with_capacity(rows.len());
        let mut element_rows = vec![Vec::new(); universe];
        for (r, row) in rows.iter().enumerate() {
            let mut bits = vec![0u64; blocks];
            for &element in row {
                set_bit(&mut bits, element);
                element_rows[element].push(r);
            }
            row_bits.push(bits);
        }

        let mut uncovered = vec![0u64; blocks];
        for element in 0..universe {
            set_bit(&mut uncovered, element);
        }

        Self {
            rows,
            row_bits,
            element_rows,
            active: vec![true; rows.len()],
            uncovered,
            universe,
            limits,
            nodes: 0,
            truncated: false,
        }
    }

    fn limit_hit(&mut self, covers: &[Vec<usize>]) -> bool {
        if let Some(max) = self.limits.max_solutions {
            if covers.len() >= max {
                return true;
            }
        }
        if let Some(max) = self.limits.max_nodes {
            if self.nodes >= max {
                return true;
            }
        }
        if let Some(deadline) = self.limits.deadline {
            if Instant::now() >= deadline {
                return true;
            }
        }
        false
    }

    /// The uncovered element with the fewest active candidate rows.
    fn most_constrained_element(&self) -> Option<(usize, usize)> {
        (0..self.universe)
            .filter(|&element| test_bit(&self.uncovered, element))
            .map(|element| {
                let candidates = self.element_rows[element]
                    .iter()
                    .filter(|&&r| self.active[r])
                    .count();
                (element, candidates)
            })
            .min_by_key(|&(_, candidates)| candidates)
    }

    /// Depth-first enumeration. Returns false when a limit fired and the
    /// whole search should unwind.
    fn search(&mut self, selected: &mut Vec<usize>, covers: &mut Vec<Vec<usize>>) -> bool {
        self.nodes += 1;
        if self.limit_hit(covers) {
            self.truncated = true;
            return false;
        }

        let (element, candidates) = match self.most_constrained_element() {
            Some(found) => found,
            // Nothing uncovered: the selection is one complete cover.
            None => {
                covers.push(selected.clone());
                if let Some(max) = self.limits.max_solutions {
                    if covers.len() >= max {
                        self.truncated = true;
                        return false;
                    }
                }
                return true;
            }
        };
        if candidates == 0 {
            // This element can never be covered on this branch.
            return true;
        }

        for i in 0..self.element_rows[element].len() {
            let row = self.element_rows[element][i];
            if !self.active[row] {
                continue;
            }

            selected.push(row);
            let trail = self.cover(row);
            let keep_going = self.search(selected, covers);
            self.uncover(row, trail);
            selected.pop();

            if !keep_going {
                return false;
            }
        }
        true
    }

    /// Select `row`: deactivate every row sharing one of its elements
    /// (itself included) and mark its elements covered. Returns the trail
    /// of deactivated rows for [`uncover`](Self::uncover).
    fn cover(&mut self, row: usize) -> Vec<usize> {
        let mut trail = Vec::new();
        for other in 0..self.rows.len() {
            if self.active[other] && intersects(&self.row_bits[other], &self.row_bits[row]) {
                self.active[other] = false;
                trail.push(other);
            }
        }
        for (uncovered, bits) in self.uncovered.iter_mut().zip(&self.row_bits[row]) {
            *uncovered &= !bits;
        }
        trail
    }

    fn uncover(&mut self, row: usize, trail: Vec<usize>) {
        for (uncovered, bits) in self.uncovered.iter_mut().zip(&self.row_bits[row]) {
            *uncovered |= bits;
        }
        for other in trail {
            self.active[other] = true;
        }
    }
}

/// Enumerate every exact cover of `0..universe` by the given rows.
///
/// Rows are element-index lists; the result refers to rows by their index
/// in `rows`. Enumeration order is deterministic for identical inputs.
pub fn enumerate_covers(rows: &[Vec<usize>], universe: usize, limits: SearchLimits) -> CoverResult {
    let mut search = CoverSearch::new(rows, universe, limits);
    let mut covers = Vec::new();
    search.search(&mut Vec::new(), &mut covers);
    CoverResult {
        covers,
        truncated: search.truncated,
        nodes: search.nodes,
    }
}
