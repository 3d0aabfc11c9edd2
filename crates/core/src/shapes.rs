//! Shapes module - tetromino catalog and matrix rotation
//!
//! A shape is a small boolean matrix (at most 4x4). Rotation works on the
//! matrix itself: transpose, then reverse the row order. There is no
//! rotation state and no kick table; the engine rejects a rotation that
//! collides.

use arrayvec::ArrayVec;

/// Largest side of any shape matrix
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// Offset of a filled cell from the shape's top-left corner
pub type CellOffset = (i8, i8);

/// Boolean shape matrix, rows top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// Catalog rows are rectangular and at most `MAX_SHAPE_DIM` wide.
    fn from_static(rows: &[&[u8]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|&v| v != 0).collect())
                .collect(),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Offsets of the filled cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// Rotate by 90 degrees: transpose, then reverse the row order.
    ///
    /// An `h x w` matrix becomes `w x h`; four rotations give back the
    /// original matrix.
    pub fn rotated(&self) -> Self {
        let (w, h) = (self.width(), self.height());
        let rows = (0..w)
            .rev()
            .map(|col| (0..h).map(|row| self.rows[row][col]).collect())
            .collect();
        Self { rows }
    }

    /// Rows as 0/1 values, handy for assertions and debugging
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&b| u8::from(b)).collect())
            .collect()
    }
}

/// The seven catalog shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    S,
    Z,
    T,
    L,
    J,
}

impl ShapeKind {
    /// Catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Spawn matrix for this kind
    pub fn shape(self) -> Shape {
        let rows: &[&[u8]] = match self {
            ShapeKind::I => &[&[1, 1, 1, 1]],
            ShapeKind::O => &[&[1, 1], &[1, 1]],
            ShapeKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            ShapeKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
            ShapeKind::T => &[&[1, 1, 1], &[0, 1, 0]],
            ShapeKind::L => &[&[1, 1, 1], &[1, 0, 0]],
            ShapeKind::J => &[&[1, 1, 1], &[0, 0, 1]],
        };
        Shape::from_static(rows)
    }
}
