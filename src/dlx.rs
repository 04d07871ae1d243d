//! The Dancing Links (DLX) exact-cover matrix and Algorithm X search.
//!
//! Column heads and cell nodes share one contiguous `Vec<Node>` instead of
//! separately-allocated, separately-typed structures. Index `0` is the
//! root sentinel, indices `1..=num_cols` are column heads, and anything
//! beyond that is a cell node — up/down neighbours can land on either kind,
//! distinguished purely by which index range they fall in.

/// One entry of the combined header/cell arena.
///
/// For a header node (index `<= num_cols`), `header` is its own index and
/// `aux` is the live-node count for that column. For a cell node, `header`
/// points at the owning column's header index and `aux` is the row index
/// the cell belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    header: usize,
    aux: usize,
}

/// A fully-populated exact-cover matrix with `num_cols` columns, built once
/// via [`DlxMatrix::build_matrix`] and then searched (destructively) via
/// [`DlxMatrix::solve`].
pub struct DlxMatrix {
    nodes: Vec<Node>,
    num_cols: usize,
    /// Arena index of one node per row, used by `cover_row`. Row `r`'s
    /// entry exists iff row `r` had at least one 1-entry.
    row_refs: Vec<usize>,
}

const ROOT: usize = 0;

impl DlxMatrix {
    /// Allocates the root sentinel and `num_cols` column heads, wired into
    /// a circular horizontal list with the root at the left end (so
    /// `root.right` is the first real column and `root.left` is the last).
    pub fn new(num_cols: usize) -> Self {
        let mut nodes = Vec::with_capacity(num_cols + 1);
        nodes.push(Node {
            left: num_cols,
            right: if num_cols == 0 { 0 } else { 1 },
            up: ROOT,
            down: ROOT,
            header: ROOT,
            aux: 0,
        });
        for col in 1..=num_cols {
            nodes.push(Node {
                left: col - 1,
                right: if col == num_cols { ROOT } else { col + 1 },
                up: col,
                down: col,
                header: col,
                aux: 0,
            });
        }

        DlxMatrix {
            nodes,
            num_cols,
            row_refs: Vec::new(),
        }
    }

    #[inline]
    fn header_index(&self, col: usize) -> usize {
        debug_assert!(col < self.num_cols, "column index out of range: {col}");
        col + 1
    }

    /// Populates `num_rows` rows by calling `has_entry(row, col)` for every
    /// `(row, col)` pair and wiring in a cell node wherever it returns
    /// `true`. Rows are never skipped or reordered, so row indices stay
    /// meaningful to the caller (the Sudoku encoder relies on row `r`
    /// always meaning the triple it was defined to mean).
    pub fn build_matrix<F>(&mut self, num_rows: usize, mut has_entry: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        self.row_refs = Vec::with_capacity(num_rows);

        for row in 0..num_rows {
            let mut first_in_row: Option<usize> = None;
            let mut last_in_row: Option<usize> = None;

            for col in 0..self.num_cols {
                if !has_entry(row, col) {
                    continue;
                }

                let header = self.header_index(col);
                let new_idx = self.nodes.len();
                let above = self.nodes[header].up;

                self.nodes.push(Node {
                    left: new_idx,
                    right: new_idx,
                    up: above,
                    down: header,
                    header,
                    aux: row,
                });

                self.nodes[above].down = new_idx;
                self.nodes[header].up = new_idx;
                self.nodes[header].aux += 1;

                match (first_in_row, last_in_row) {
                    (None, _) => first_in_row = Some(new_idx),
                    (Some(first), Some(last)) => {
                        self.nodes[last].right = new_idx;
                        self.nodes[new_idx].left = last;
                        self.nodes[new_idx].right = first;
                        self.nodes[first].left = new_idx;
                    }
                    (Some(_), None) => unreachable!(),
                }
                last_in_row = Some(new_idx);
            }

            // A row with no columns can't be covered; it simply never
            // shows up as a solution candidate for any column.
            self.row_refs.push(last_in_row.unwrap_or(usize::MAX));
        }
    }

    /// Covers `n`'s column, and every other column touched by the row `n`
    /// belongs to — the convenience used by the encoder to pre-cover clue
    /// rows and by the search to commit a chosen row.
    ///
    /// A column that's already covered (e.g. two clues conflicting on the
    /// same row/column/block constraint) is left alone: per the encoder's
    /// pre-cover rule, re-covering it would be a no-op on an already-gone
    /// column, and walking it again would double-unlink its live nodes.
    pub fn cover_row(&mut self, row: usize) {
        let start = self.row_refs[row];
        if start == usize::MAX {
            return;
        }
        let mut current = start;
        loop {
            let header = self.nodes[current].header;
            if !self.is_covered(header) {
                self.cover(header);
            }
            current = self.nodes[current].right;
            if current == start {
                break;
            }
        }
    }

    /// A column head is covered iff it has been unlinked from the
    /// horizontal head ring: a live head always satisfies
    /// `left.right == self`.
    #[inline]
    fn is_covered(&self, col_head: usize) -> bool {
        let left = self.nodes[col_head].left;
        self.nodes[left].right != col_head
    }

    /// Removes column `col_head` from the header ring, then removes every
    /// row that intersects it from every other column those rows touch.
    /// Walks down-then-right, matching the nested symmetry `uncover`
    /// relies on.
    fn cover(&mut self, col_head: usize) {
        let h = self.nodes[col_head];
        self.nodes[h.left].right = h.right;
        self.nodes[h.right].left = h.left;

        let mut i = h.down;
        while i != col_head {
            let mut j = self.nodes[i].right;
            while j != i {
                let n = self.nodes[j];
                self.nodes[n.down].up = n.up;
                self.nodes[n.up].down = n.down;
                self.nodes[n.header].aux -= 1;
                j = n.right;
            }
            i = self.nodes[i].down;
        }
    }

    /// The exact inverse of `cover`: walks up-then-left, relinking.
    fn uncover(&mut self, col_head: usize) {
        let mut i = self.nodes[col_head].up;
        while i != col_head {
            let mut j = self.nodes[i].left;
            while j != i {
                let n = self.nodes[j];
                self.nodes[n.header].aux += 1;
                self.nodes[n.up].down = j;
                self.nodes[n.down].up = j;
                j = n.left;
            }
            i = self.nodes[i].up;
        }

        let h = self.nodes[col_head];
        self.nodes[h.left].right = col_head;
        self.nodes[h.right].left = col_head;
    }

    /// Column head with the smallest live count, ties broken by the first
    /// one encountered walking right from the root.
    fn choose_column(&self) -> usize {
        let mut best = ROOT;
        let mut best_size = usize::MAX;
        let mut c = self.nodes[ROOT].right;
        while c != ROOT {
            if self.nodes[c].aux < best_size {
                best_size = self.nodes[c].aux;
                best = c;
            }
            c = self.nodes[c].right;
        }
        best
    }

    /// Recursive Algorithm X with the S-heuristic. Returns `true` (and
    /// leaves `solution` filled with the committed row indices) as soon as
    /// one full cover is found; this engine stops at the first solution
    /// rather than enumerating every exact cover.
    fn search(&mut self, solution: &mut Vec<usize>) -> bool {
        if self.nodes[ROOT].right == ROOT {
            return true;
        }

        let col = self.choose_column();
        self.cover(col);

        let mut row_node = self.nodes[col].down;
        while row_node != col {
            solution.push(self.nodes[row_node].aux);

            let mut j = self.nodes[row_node].right;
            while j != row_node {
                self.cover(self.nodes[j].header);
                j = self.nodes[j].right;
            }

            if self.search(solution) {
                return true;
            }

            solution.pop();
            let mut j = self.nodes[row_node].left;
            while j != row_node {
                self.uncover(self.nodes[j].header);
                j = self.nodes[j].left;
            }

            row_node = self.nodes[row_node].down;
        }

        self.uncover(col);
        false
    }

    /// Runs the search and returns the chosen row indices in commit order,
    /// or an empty vector if no exact cover exists (the puzzle is
    /// unsolvable under its given clues).
    pub fn solve(&mut self) -> Vec<usize> {
        let mut solution = Vec::new();
        self.search(&mut solution);
        solution
    }
}
