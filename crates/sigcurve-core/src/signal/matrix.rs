// crates/sigcurve-core/src/signal/matrix.rs

use crate::error::{CurveError, Result};

/// Rectangular batch of quantized samples: `len()` rows of `dims()` coordinates.
///
/// Stored row-major. Column 0 is the reference axis of the Hilbert transform,
/// so column order matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordMatrix {
    dims: usize,
    data: Vec<u64>,
}

impl CoordMatrix {
    /// Build from one slice per sample.
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| CurveError::Shape("coordinate matrix has no samples".into()))?;
        let dims = first.as_ref().len();
        if dims == 0 {
            return Err(CurveError::Shape("samples have zero dimensions".into()));
        }

        let mut data = Vec::with_capacity(rows.len() * dims);
        for (k, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != dims {
                return Err(CurveError::Shape(format!(
                    "row {} has {} coordinates, expected {}",
                    k,
                    row.len(),
                    dims
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self { dims, data })
    }

    /// Build from one slice per signal (dimension), each holding every sample.
    pub fn from_columns<C: AsRef<[u64]>>(columns: &[C]) -> Result<Self> {
        let dims = columns.len();
        if dims == 0 {
            return Err(CurveError::Shape("coordinate matrix has no signals".into()));
        }
        let samples = columns[0].as_ref().len();
        if samples == 0 {
            return Err(CurveError::Shape("coordinate matrix has no samples".into()));
        }
        for (d, col) in columns.iter().enumerate() {
            if col.as_ref().len() != samples {
                return Err(CurveError::Shape(format!(
                    "signal {} has {} samples, expected {}",
                    d,
                    col.as_ref().len(),
                    samples
                )));
            }
        }

        let mut data = Vec::with_capacity(samples * dims);
        for k in 0..samples {
            for col in columns {
                data.push(col.as_ref()[k]);
            }
        }

        Ok(Self { dims, data })
    }

    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Number of samples (T).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.dims
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn row(&self, k: usize) -> &[u64] {
        &self.data[k * self.dims..(k + 1) * self.dims]
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u64]> + ExactSizeIterator + '_ {
        self.data.chunks_exact(self.dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_transpose_into_rows() {
        let m = CoordMatrix::from_columns(&[vec![1u64, 2, 3], vec![10, 20, 30]]).unwrap();
        assert_eq!(m.dims(), 2);
        assert_eq!(m.len(), 3);
        assert_eq!(m.row(1), &[2, 20]);

        let by_rows = CoordMatrix::from_rows(&[[1u64, 10], [2, 20], [3, 30]]).unwrap();
        assert_eq!(m, by_rows);
    }

    #[test]
    fn ragged_rows_name_the_offender() {
        let rows: Vec<Vec<u64>> = vec![vec![1, 2], vec![3, 4], vec![5]];
        let err = CoordMatrix::from_rows(&rows).unwrap_err();
        match err {
            CurveError::Shape(msg) => assert!(msg.contains("row 2"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_and_zero_width_are_rejected() {
        let none: [[u64; 2]; 0] = [];
        assert!(matches!(
            CoordMatrix::from_rows(&none),
            Err(CurveError::Shape(_))
        ));

        let zero: Vec<Vec<u64>> = vec![vec![], vec![]];
        assert!(matches!(
            CoordMatrix::from_rows(&zero),
            Err(CurveError::Shape(_))
        ));

        let no_samples: Vec<Vec<u64>> = vec![vec![], vec![]];
        assert!(matches!(
            CoordMatrix::from_columns(&no_samples),
            Err(CurveError::Shape(_))
        ));
    }

    #[test]
    fn unequal_columns_are_rejected() {
        let err = CoordMatrix::from_columns(&[vec![1u64, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, CurveError::Shape(_)));
    }
}
