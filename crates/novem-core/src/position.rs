//! Board coordinates.

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions are validated at construction, so every `Position`
/// names a real cell.
///
/// # Examples
///
/// ```
/// use novem_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.index(), 67);
/// assert_eq!(pos.box_index(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((index % 9) as u8, (index / 9) as u8);
        Self { x, y }
    }

    /// Creates a position from a box index (0-8, left to right, top to
    /// bottom) and a cell index within that box (0-8, row-major).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell_index` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9);
        Self {
            x: box_index % 3 * 3 + cell_index % 3,
            y: box_index / 3 * 3 + cell_index / 3,
        }
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3×3 box containing this position (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns true if `other` is a different cell sharing a row, column,
    /// or box with this position.
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        (self.x != other.x || self.y != other.y)
            && (self.x == other.x || self.y == other.y || self.box_index() == other.box_index())
    }

    /// Returns the 20 other positions sharing a house (row, column, or box)
    /// with this position: 8 row peers, 8 column peers, and the 4 box peers
    /// outside its row and column.
    #[must_use]
    pub fn house_peers(self) -> [Self; 20] {
        let mut peers = [Self { x: 0, y: 0 }; 20];
        let mut n = 0;
        for x in 0..9 {
            if x != self.x {
                peers[n] = Self { x, y: self.y };
                n += 1;
            }
        }
        for y in 0..9 {
            if y != self.y {
                peers[n] = Self { x: self.x, y };
                n += 1;
            }
        }
        let left = self.x / 3 * 3;
        let top = self.y / 3 * 3;
        for y in top..top + 3 {
            for x in left..left + 3 {
                if x != self.x && y != self.y {
                    peers[n] = Self { x, y };
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, 20);
        peers
    }
}
