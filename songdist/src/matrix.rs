use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use ndarray::prelude::*;

use crate::{
    dataset::{Dataset, FeatureSelection},
    error::{Result, SongDistError},
    metricdata::{EuclideanData, ManhattanData, MetricData},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Sum of absolute per-feature differences
    Manhattan,
    /// Square root of the sum of squared per-feature differences
    #[default]
    Euclidean,
}

impl FromStr for Metric {
    type Err = SongDistError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "manhattan" => Ok(Self::Manhattan),
            "euclid" | "euclidean" => Ok(Self::Euclidean),
            other => Err(SongDistError::UnknownMetric(other.to_owned())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => write!(f, "manhattan"),
            Self::Euclidean => write!(f, "euclidean"),
        }
    }
}

/// Draws a labelled square table, typically as a heatmap.
pub trait HeatmapRenderer {
    fn render(&mut self, labels: &[String], values: ArrayView2<f32>);
}

/// Square matrix of distances between every pair of rows of a dataset,
/// indexed by the dataset's row keys on both axes.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<K> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
    values: Array2<f32>,
    metric: Metric,
}

impl<K> DistanceMatrix<K> {
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn values(&self) -> ArrayView2<f32> {
        self.values.view()
    }

    pub fn into_values(self) -> Array2<f32> {
        self.values
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn at(&self, i: usize, j: usize) -> Result<f32> {
        self.values
            .get((i, j))
            .copied()
            .ok_or(SongDistError::OutOfRange {
                index: i.max(j),
                len: self.len(),
            })
    }

    /// Row-major nested representation, indexed by row position.
    pub fn as_nested(&self) -> Vec<Vec<f32>> {
        self.values.rows().into_iter().map(|r| r.to_vec()).collect()
    }
}

impl<K: Eq + Hash> DistanceMatrix<K> {
    /// Distance between the rows identified by `a` and `b`.
    pub fn get(&self, a: &K, b: &K) -> Option<f32> {
        let i = *self.index.get(a)?;
        let j = *self.index.get(b)?;
        Some(self.values[[i, j]])
    }
}

impl<K: fmt::Display> DistanceMatrix<K> {
    /// Hands the labelled table to `renderer`.
    pub fn render<R: HeatmapRenderer + ?Sized>(&self, renderer: &mut R) {
        let labels: Vec<String> = self.keys.iter().map(|k| k.to_string()).collect();
        renderer.render(&labels, self.values.view());
    }
}

fn fill_matrix<D: MetricData>(data: &D) -> Array2<f32> {
    let n = data.num_points();
    let mut matrix = Array2::zeros((n, n));
    let mut column = vec![0.0f32; n];
    for j in 0..n {
        data.all_distances(j, &mut column);
        for (i, d) in column.iter().enumerate() {
            matrix[[i, j]] = *d;
        }
    }
    matrix
}

/// Computes the distance between every ordered pair of rows of `dataset`,
/// considering only the columns in `selection`.
pub fn compute_matrix<K: Clone + Eq + Hash>(
    dataset: &Dataset<K>,
    selection: &FeatureSelection,
    metric: Metric,
) -> Result<DistanceMatrix<K>> {
    let selected = dataset.select_columns(selection)?;
    log::debug!(
        "computing {metric} distances between {} rows over {:?}",
        dataset.num_rows(),
        selection.names()
    );
    let values = match metric {
        Metric::Manhattan => fill_matrix(&ManhattanData::new(selected.view())),
        Metric::Euclidean => fill_matrix(&EuclideanData::new(selected.view())),
    };
    Ok(DistanceMatrix {
        keys: dataset.keys().to_vec(),
        index: dataset.key_index().clone(),
        values,
        metric,
    })
}

/// Configures a distance matrix computation. Without explicit features,
/// every column of the dataset takes part.
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrixBuilder {
    metric: Metric,
    features: Option<Vec<String>>,
}

impl DistanceMatrixBuilder {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            features: None,
        }
    }

    pub fn with_metric(self, metric: Metric) -> Self {
        Self { metric, ..self }
    }

    pub fn with_features<I>(self, features: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            features: Some(features.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    pub fn compute<K: Clone + Eq + Hash>(&self, dataset: &Dataset<K>) -> Result<DistanceMatrix<K>> {
        let selection = match &self.features {
            Some(names) => FeatureSelection::new(names.iter().cloned())?,
            None => FeatureSelection::all(dataset)?,
        };
        compute_matrix(dataset, &selection, self.metric)
    }
}
