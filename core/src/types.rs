use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine, treasure, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`. Also used for board sizes as `(rows, cols)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Size of an `Array2` as `(rows, cols)`.
///
/// Boards are only ever built from a [`Coord2`] size, so both axes fit.
pub(crate) fn array_size<T>(array: &Array2<T>) -> Coord2 {
    let (rows, cols) = array.dim();
    (
        rows.try_into().unwrap_or(Coord::MAX),
        cols.try_into().unwrap_or(Coord::MAX),
    )
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, array_size(self))
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// The up to eight in-bounds neighbors of a cell. Edges do not wrap around.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
        None
    }
}

/// Every coordinate of a board of the given size, in row-major order.
pub fn iter_coords((rows, cols): Coord2) -> impl Iterator<Item = Coord2> {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}
