use ndarray::{prelude::*, Data};

use crate::metricdata::MetricData;

/// Euclidean distance between the rows of a two dimensional array.
pub struct EuclideanData<S: Data<Elem = f32>> {
    data: ArrayBase<S, Ix2>,
}

impl<S: Data<Elem = f32>> EuclideanData<S> {
    pub fn new(data: ArrayBase<S, Ix2>) -> Self {
        Self { data }
    }
}

/// Sum of squared per-coordinate differences.
pub fn sq_eucl<S1, S2>(a: &ArrayBase<S1, Ix1>, b: &ArrayBase<S2, Ix1>) -> f32
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
{
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

pub fn eucl<S1, S2>(a: &ArrayBase<S1, Ix1>, b: &ArrayBase<S2, Ix1>) -> f32
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
{
    sq_eucl(a, b).sqrt()
}

impl<S: Data<Elem = f32>> MetricData for EuclideanData<S> {
    fn distance(&self, i: usize, j: usize) -> f32 {
        // Differences rather than the squared-norm expansion, so that
        // identical rows are at distance exactly zero.
        eucl(&self.data.row(i), &self.data.row(j))
    }

    fn all_distances(&self, j: usize, out: &mut [f32]) {
        assert_eq!(out.len(), self.data.nrows());
        for (i, oo) in out.iter_mut().enumerate() {
            *oo = self.distance(i, j);
        }
    }

    fn num_points(&self) -> usize {
        self.data.nrows()
    }

    fn dimensions(&self) -> usize {
        self.data.ncols()
    }
}
