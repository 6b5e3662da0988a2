use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use ndarray::{prelude::*, Data};

use crate::error::{Result, SongDistError};

/// Composite identity of a song.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SongKey {
    pub name: String,
    pub artist: String,
}

impl SongKey {
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for SongKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.artist)
    }
}

/// A table of songs: one row per key, one named `f32` column per feature.
///
/// The table is validated on construction and never mutated afterwards;
/// operations that restrict or annotate it return a new dataset.
#[derive(Debug, Clone)]
pub struct Dataset<K> {
    keys: Vec<K>,
    /// position of every key in `keys`
    index: HashMap<K, usize>,
    columns: Vec<String>,
    values: Array2<f32>,
    clusters: Option<Array1<usize>>,
}

fn build_index<K: Clone + Eq + Hash>(keys: &[K]) -> Result<HashMap<K, usize>> {
    let mut index = HashMap::with_capacity(keys.len());
    for (pos, k) in keys.iter().enumerate() {
        if index.insert(k.clone(), pos).is_some() {
            return Err(SongDistError::DuplicateKey(pos));
        }
    }
    Ok(index)
}

impl<K: Clone + Eq + Hash> Dataset<K> {
    pub fn new<S, I>(keys: Vec<K>, columns: I, values: ArrayBase<S, Ix2>) -> Result<Self>
    where
        S: Data<Elem = f32>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if values.nrows() != keys.len() {
            return Err(SongDistError::ShapeMismatch(format!(
                "{} keys for {} rows",
                keys.len(),
                values.nrows()
            )));
        }
        if values.ncols() != columns.len() {
            return Err(SongDistError::ShapeMismatch(format!(
                "{} column names for {} columns",
                columns.len(),
                values.ncols()
            )));
        }

        let mut seen_columns = HashSet::new();
        for c in columns.iter() {
            if !seen_columns.insert(c.as_str()) {
                return Err(SongDistError::DuplicateColumn(c.clone()));
            }
        }
        let index = build_index(&keys)?;

        if let Some(((row, col), value)) = values.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(SongDistError::NonFinite {
                row,
                column: columns[col].clone(),
                value: *value,
            });
        }

        Ok(Self {
            keys,
            index,
            columns,
            values: values.to_owned(),
            clusters: None,
        })
    }

    /// Attaches one cluster label per row.
    pub fn with_clusters<I: IntoIterator<Item = usize>>(self, labels: I) -> Result<Self> {
        let labels: Array1<usize> = labels.into_iter().collect();
        if labels.len() != self.num_rows() {
            return Err(SongDistError::DimensionMismatch {
                expected: self.num_rows(),
                actual: labels.len(),
            });
        }
        Ok(Self {
            clusters: Some(labels),
            ..self
        })
    }

    /// Restricts the dataset to the given row positions, in the given order.
    /// A position may appear only once.
    pub fn subset<I: IntoIterator<Item = usize>>(&self, indices: I) -> Result<Self> {
        let indices: Vec<usize> = indices.into_iter().collect();
        if let Some(&index) = indices.iter().find(|&&i| i >= self.num_rows()) {
            return Err(SongDistError::OutOfRange {
                index,
                len: self.num_rows(),
            });
        }
        let keys: Vec<K> = indices.iter().map(|&i| self.keys[i].clone()).collect();
        let index = build_index(&keys)?;
        Ok(Self {
            keys,
            index,
            columns: self.columns.clone(),
            values: self.values.select(Axis(0), &indices),
            clusters: self
                .clusters
                .as_ref()
                .map(|c| c.select(Axis(0), &indices)),
        })
    }

    pub fn position(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub(crate) fn key_index(&self) -> &HashMap<K, usize> {
        &self.index
    }

    /// The values of the selected columns, in selection order.
    pub fn select_columns(&self, selection: &FeatureSelection) -> Result<Array2<f32>> {
        let positions = selection.resolve(self)?;
        Ok(self.values.select(Axis(1), &positions))
    }

    /// Mean of every column.
    pub fn centroid(&self) -> Result<Array1<f32>> {
        self.values
            .mean_axis(Axis(0))
            .ok_or(SongDistError::EmptyDataset)
    }
}

impl<K> Dataset<K> {
    pub fn num_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn num_columns(&self) -> usize {
        self.values.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> ArrayView2<f32> {
        self.values.view()
    }

    pub fn row(&self, index: usize) -> ArrayView1<f32> {
        self.values.row(index)
    }

    pub fn clusters(&self) -> Option<ArrayView1<usize>> {
        self.clusters.as_ref().map(|c| c.view())
    }

    pub fn key_at(&self, index: usize) -> Result<&K> {
        self.keys.get(index).ok_or(SongDistError::OutOfRange {
            index,
            len: self.num_rows(),
        })
    }

    /// Positions of the rows labelled with `cluster`.
    pub fn cluster_rows(&self, cluster: usize) -> Result<Vec<usize>> {
        let clusters = self.clusters.as_ref().ok_or(SongDistError::MissingClusters)?;
        Ok(clusters
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == cluster)
            .map(|(i, _)| i)
            .collect())
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| SongDistError::MissingColumn(name.to_owned()))
    }
}

/// An ordered, non-empty list of column names taking part in a distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSelection {
    names: Vec<String>,
}

impl FeatureSelection {
    pub fn new<I>(names: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SongDistError::EmptySelection);
        }
        Ok(Self { names })
    }

    /// Every column of the dataset, in column order.
    pub fn all<K>(dataset: &Dataset<K>) -> Result<Self> {
        Self::new(dataset.columns().iter().cloned())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Maps the names to column positions of `dataset`.
    pub fn resolve<K>(&self, dataset: &Dataset<K>) -> Result<Vec<usize>> {
        self.names
            .iter()
            .map(|name| dataset.column_index(name))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use ndarray::prelude::*;

    use super::{Dataset, FeatureSelection, SongKey};
    use crate::error::SongDistError;

    fn keys(n: usize) -> Vec<SongKey> {
        (0..n)
            .map(|i| SongKey::new(format!("song {i}"), "artist"))
            .collect()
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let err = Dataset::new(keys(2), ["a"], array![[0.0f32], [1.0], [2.0]]).unwrap_err();
        assert!(matches!(err, SongDistError::ShapeMismatch(_)));

        let err = Dataset::new(keys(1), ["a", "b"], array![[0.0f32]]).unwrap_err();
        assert!(matches!(err, SongDistError::ShapeMismatch(_)));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Dataset::new(keys(1), ["a", "a"], array![[0.0f32, 1.0]]).unwrap_err();
        assert_eq!(err, SongDistError::DuplicateColumn("a".into()));

        let mut k = keys(2);
        k[1] = k[0].clone();
        let err = Dataset::new(k, ["a"], array![[0.0f32], [1.0]]).unwrap_err();
        assert_eq!(err, SongDistError::DuplicateKey(1));
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = Dataset::new(keys(2), ["a", "b"], array![[0.0f32, 1.0], [f32::NAN, 2.0]])
            .unwrap_err();
        assert!(matches!(
            err,
            SongDistError::NonFinite { row: 1, ref column, .. } if column == "a"
        ));
    }

    #[test]
    fn test_selection() {
        let data = Dataset::new(
            keys(2),
            ["energy", "tempo", "valence"],
            array![[0.1f32, 120.0, 0.3], [0.5, 90.0, 0.7]],
        )
        .unwrap();
        let sel = FeatureSelection::new(["valence", "energy"]).unwrap();
        assert_eq!(sel.resolve(&data).unwrap(), vec![2, 0]);
        assert_eq!(
            data.select_columns(&sel).unwrap(),
            array![[0.3f32, 0.1], [0.7, 0.5]]
        );

        let missing = FeatureSelection::new(["loudness"]).unwrap();
        assert_eq!(
            data.select_columns(&missing).unwrap_err(),
            SongDistError::MissingColumn("loudness".into())
        );
        assert_eq!(
            FeatureSelection::new(Vec::<String>::new()).unwrap_err(),
            SongDistError::EmptySelection
        );
    }

    #[test]
    fn test_subset_keeps_rows_aligned() {
        let data = Dataset::new(keys(3), ["a"], array![[0.0f32], [1.0], [2.0]])
            .unwrap()
            .with_clusters([7, 8, 9])
            .unwrap();
        let sub = data.subset([2, 0]).unwrap();
        assert_eq!(sub.keys(), &[SongKey::new("song 2", "artist"), SongKey::new("song 0", "artist")]);
        assert_eq!(sub.values(), array![[2.0f32], [0.0]]);
        assert_eq!(sub.clusters().unwrap(), array![9usize, 7]);
        assert_eq!(data.cluster_rows(8).unwrap(), vec![1]);
        assert!(data.cluster_rows(1).unwrap().is_empty());

        assert_eq!(
            data.subset([3]).unwrap_err(),
            SongDistError::OutOfRange { index: 3, len: 3 }
        );
        assert_eq!(sub.position(&SongKey::new("song 0", "artist")), Some(1));
        assert_eq!(sub.position(&SongKey::new("song 1", "artist")), None);
        assert_eq!(data.subset([1, 1]).unwrap_err(), SongDistError::DuplicateKey(1));

        assert_eq!(
            data.key_at(3).unwrap_err(),
            SongDistError::OutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn test_cluster_rows_without_labels() {
        let data = Dataset::new(keys(1), ["a"], array![[0.0f32]]).unwrap();
        assert_eq!(data.cluster_rows(0).unwrap_err(), SongDistError::MissingClusters);
    }

    #[test]
    fn test_centroid() {
        let data = Dataset::new(keys(2), ["a", "b"], array![[0.0f32, 2.0], [4.0, 6.0]]).unwrap();
        assert_eq!(data.centroid().unwrap(), array![2.0f32, 4.0]);

        let empty = Dataset::<SongKey>::new(vec![], ["a"], Array2::<f32>::zeros((0, 1))).unwrap();
        assert_eq!(empty.centroid().unwrap_err(), SongDistError::EmptyDataset);
    }
}
