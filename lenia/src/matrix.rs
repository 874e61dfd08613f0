// matrix.rs - Dense row-major matrix

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("matrix height can not be zero")]
    ZeroHeight,
    #[error("matrix width can not be zero")]
    ZeroWidth,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A `width` x `height` matrix stored row-major, addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    width: usize,
    height: usize,
    values: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    pub fn from_constant(width: usize, height: usize, constant: T) -> Self {
        Self {
            width,
            height,
            values: vec![constant; width * height],
        }
    }

    /// Fills each cell with `f(x, y)`.
    pub fn from_function<F>(width: usize, height: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> T,
    {
        let values = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            width,
            height,
            values,
        }
    }

    /// Builds a matrix from rows, which must be non-empty and of equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).ok_or(MatrixError::ZeroHeight)?;
        if width == 0 {
            return Err(MatrixError::ZeroWidth);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(MatrixError::RaggedRow {
                row,
                expected: width,
                found: r.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> T {
        self.values[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        self.values[y * self.width + x] = value;
    }

    /// Reads `(x + dx, y + dy)`, wrapping around both edges.
    pub fn get_wrapped(&self, x: usize, y: usize, dx: isize, dy: isize) -> T {
        let wx = (x as isize + dx).rem_euclid(self.width as isize) as usize;
        let wy = (y as isize + dy).rem_euclid(self.height as isize) as usize;
        self.get(wx, wy)
    }

    /// Applies `f` to every cell in place.
    pub fn map<F>(&mut self, f: F)
    where
        F: Fn(&T) -> T,
    {
        self.values.iter_mut().for_each(|v| *v = f(v));
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_constant() {
        let matrix = Matrix::from_constant(3, 2, true);
        assert_eq!(matrix.as_slice(), &[true; 6]);
    }

    #[test]
    fn from_function_is_row_major() {
        let matrix = Matrix::from_function(3, 2, |x, y| (x, y));
        assert_eq!(
            matrix.as_slice(),
            &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn from_rows_validates_shape() {
        assert_eq!(Matrix::<i32>::from_rows(vec![]), Err(MatrixError::ZeroHeight));
        assert_eq!(
            Matrix::<i32>::from_rows(vec![vec![], vec![]]),
            Err(MatrixError::ZeroWidth)
        );
        assert_eq!(
            Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]),
            Err(MatrixError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );

        let matrix = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!((matrix.width(), matrix.height()), (2, 2));
        assert_eq!(matrix.get(0, 1), 3);
    }

    #[test]
    fn map_in_place() {
        let mut matrix = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        matrix.map(|v| v * 2);
        assert_eq!(matrix.as_slice(), &[2, 4, 6, 8]);
    }

    #[test]
    fn wrapped_reads() {
        let matrix = Matrix::from_function(3, 3, |x, y| y * 3 + x);
        assert_eq!(matrix.get_wrapped(0, 0, -1, -1), 8);
        assert_eq!(matrix.get_wrapped(2, 2, 1, 0), 6);
        assert_eq!(matrix.get_wrapped(1, 1, 0, 4), 7);
    }
}
