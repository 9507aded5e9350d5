//! Letter matrix: generation, row rotation, column readback.

pub const GRID_SIZE: usize = 7;

/// Columns shorter than this are never sent to the oracle.
pub const MIN_WORD_LEN: usize = 3;

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];
pub const CONSONANTS: [char; 21] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X',
    'Y', 'Z',
];

/// Probability that a freshly generated cell draws from the vowel pool.
pub const VOWEL_BIAS: f64 = 0.3;

/// A 7×7 matrix of uppercase letters. Dimensions are fixed by the type, so
/// every grid is well-formed by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl LetterGrid {
    /// Generate a fresh grid. Each cell is drawn independently: with
    /// probability [`VOWEL_BIAS`] uniformly from [`VOWELS`], otherwise
    /// uniformly from [`CONSONANTS`].
    pub fn generate(rng: &mut fastrand::Rng) -> Self {
        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                let pool: &[char] = if rng.f64() < VOWEL_BIAS {
                    &VOWELS
                } else {
                    &CONSONANTS
                };
                *cell = pool[rng.usize(..pool.len())];
            }
        }
        Self { cells }
    }

    /// Build a grid from explicit rows. Letters are uppercased; anything
    /// outside the game alphabet is rejected.
    pub fn from_rows(rows: [[char; GRID_SIZE]; GRID_SIZE]) -> Option<Self> {
        let mut cells = rows;
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                let upper = cell.to_ascii_uppercase();
                if !is_grid_letter(upper) {
                    return None;
                }
                *cell = upper;
            }
        }
        Some(Self { cells })
    }

    pub fn letter(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    pub fn row(&self, row: usize) -> &[char; GRID_SIZE] {
        &self.cells[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Rotate one row right by a single step: the last letter moves to the
    /// first column, every other letter shifts one column to the right.
    pub fn rotate_row_right(&mut self, row: usize) {
        if row >= GRID_SIZE {
            return;
        }
        self.cells[row].rotate_right(1);
    }

    /// The candidate word for one column, read top to bottom.
    pub fn column_word(&self, col: usize) -> String {
        self.cells.iter().map(|row| row[col]).collect()
    }
}

pub fn is_grid_letter(ch: char) -> bool {
    VOWELS.contains(&ch) || CONSONANTS.contains(&ch)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/grid.rs"]
mod tests;
