pub mod centroid;
pub mod dataset;
pub mod error;
pub mod features;
pub mod matrix;
pub mod metricdata;
pub mod normalize;
pub mod sampling;

pub use crate::{
    centroid::distances_to_centroid,
    dataset::{Dataset, FeatureSelection, SongKey},
    error::{ErrorKind, Result, SongDistError},
    features::{description, AudioFeatures, FeatureCatalog, FeatureInfo},
    matrix::{compute_matrix, DistanceMatrix, DistanceMatrixBuilder, HeatmapRenderer, Metric},
    normalize::normalize,
    sampling::{pick_random_row, pick_random_rows},
};

#[cfg(test)]
mod test {
    use ndarray::prelude::*;
    use ndarray_rand::rand::prelude::*;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    use crate::dataset::{Dataset, SongKey};

    /// A table of `n` songs with features drawn uniformly from `[0, 1)`.
    pub(crate) fn make_songs(n: usize, features: &[&str]) -> Dataset<SongKey> {
        let mut rng = thread_rng();
        let values = Array2::random_using((n, features.len()), Uniform::new(0.0f32, 1.0), &mut rng);
        let keys = (0..n)
            .map(|i| SongKey::new(format!("track {i}"), format!("artist {}", i % 7)))
            .collect();
        Dataset::new(keys, features.iter().copied(), values).unwrap()
    }
}
