use std::hash::Hash;

use ndarray::{prelude::*, Data};

use crate::{
    dataset::Dataset,
    error::{Result, SongDistError},
    metricdata::euclideandata::eucl,
};

/// Euclidean distance of every row to `centroid`, across all columns,
/// in row order.
pub fn distances_to_centroid<K, S: Data<Elem = f32>>(
    dataset: &Dataset<K>,
    centroid: &ArrayBase<S, Ix1>,
) -> Result<Array1<f32>> {
    if centroid.len() != dataset.num_columns() {
        return Err(SongDistError::DimensionMismatch {
            expected: dataset.num_columns(),
            actual: centroid.len(),
        });
    }
    Ok(dataset
        .values()
        .rows()
        .into_iter()
        .map(|row| eucl(&row, centroid))
        .collect())
}

/// Restricts `dataset` to the rows labelled `cluster` and returns those rows
/// together with their distance to the cluster mean.
pub fn distances_to_cluster_centroid<K: Clone + Eq + Hash>(
    dataset: &Dataset<K>,
    cluster: usize,
) -> Result<(Dataset<K>, Array1<f32>)> {
    let members = dataset.subset(dataset.cluster_rows(cluster)?)?;
    if members.is_empty() {
        return Err(SongDistError::NoCandidates);
    }
    let centroid = members.centroid()?;
    log::debug!(
        "cluster {cluster}: {} members, centroid {centroid}",
        members.num_rows()
    );
    let distances = distances_to_centroid(&members, &centroid)?;
    Ok((members, distances))
}
