use ndarray::{prelude::*, Data};

use crate::metricdata::MetricData;

/// Manhattan (L1) distance between the rows of a two dimensional array.
pub struct ManhattanData<S: Data<Elem = f32>> {
    data: ArrayBase<S, Ix2>,
}

impl<S: Data<Elem = f32>> ManhattanData<S> {
    pub fn new(data: ArrayBase<S, Ix2>) -> Self {
        Self { data }
    }
}

pub fn manhattan<S1, S2>(a: &ArrayBase<S1, Ix1>, b: &ArrayBase<S2, Ix1>) -> f32
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
{
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

impl<S: Data<Elem = f32>> MetricData for ManhattanData<S> {
    fn distance(&self, i: usize, j: usize) -> f32 {
        manhattan(&self.data.row(i), &self.data.row(j))
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
