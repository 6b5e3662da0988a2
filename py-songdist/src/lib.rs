use ndarray_rand::rand::thread_rng;
use numpy::{ndarray::Array2, *};
use pyo3::prelude::*;
use songdist::{
    centroid, compute_matrix, features, normalize, pick_random_rows, AudioFeatures, Dataset,
    FeatureSelection,
};

fn positional_columns(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{i}")).collect()
}

/// Distance matrix between the rows of `values`, restricted to `features`.
///
/// Returns the positional form only: cell `[i, j]` is the distance between
/// rows `i` and `j`. Use `labelled_distance_matrix` for the table indexed by
/// row keys. Heatmap rendering is left to the caller.
#[pyfunction]
#[pyo3(signature = (values, columns, features, metric="euclid"))]
fn distance_matrix<'py>(
    py: Python<'py>,
    values: PyReadonlyArray2<'py, f32>,
    columns: Vec<String>,
    features: Vec<String>,
    metric: &str,
) -> PyResult<Bound<'py, PyArray2<f32>>> {
    let values = values.as_array();
    let keys: Vec<usize> = (0..values.nrows()).collect();
    let dataset = Dataset::new(keys, columns, values)?;
    let selection = FeatureSelection::new(features)?;
    let matrix = compute_matrix(&dataset, &selection, metric.parse()?)?;
    Ok(matrix.into_values().into_pyarray_bound(py))
}

/// Same as `distance_matrix`, with the row keys labelling both axes.
///
/// Returns `(keys, matrix)` where `keys[i]` names row and column `i` of
/// `matrix`, ready to become a labelled data frame or heatmap.
#[pyfunction]
#[pyo3(signature = (values, keys, columns, features, metric="euclid"))]
fn labelled_distance_matrix<'py>(
    py: Python<'py>,
    values: PyReadonlyArray2<'py, f32>,
    keys: Vec<String>,
    columns: Vec<String>,
    features: Vec<String>,
    metric: &str,
) -> PyResult<(Vec<String>, Bound<'py, PyArray2<f32>>)> {
    let dataset = Dataset::new(keys, columns, values.as_array())?;
    let selection = FeatureSelection::new(features)?;
    let matrix = compute_matrix(&dataset, &selection, metric.parse()?)?;
    let keys = matrix.keys().to_vec();
    Ok((keys, matrix.into_values().into_pyarray_bound(py)))
}

#[pyfunction]
fn distances_to_centroid<'py>(
    py: Python<'py>,
    values: PyReadonlyArray2<'py, f32>,
    centroid: PyReadonlyArray1<'py, f32>,
) -> PyResult<Bound<'py, PyArray1<f32>>> {
    let values = values.as_array();
    let keys: Vec<usize> = (0..values.nrows()).collect();
    let dataset = Dataset::new(keys, positional_columns(values.ncols()), values)?;
    let distances = centroid::distances_to_centroid(&dataset, &centroid.as_array())?;
    Ok(distances.into_pyarray_bound(py))
}

#[pyfunction]
#[pyo3(name = "normalize")]
fn py_normalize<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f32>,
    min: f32,
    max: f32,
) -> PyResult<Bound<'py, PyArray1<f32>>> {
    Ok(normalize(&values.as_array(), min, max)?.into_pyarray_bound(py))
}

#[pyfunction]
fn description(name: &str) -> PyResult<String> {
    Ok(features::description(&AudioFeatures, name)?.to_owned())
}

/// Samples `count` of the given keys among those labelled `cluster`.
#[pyfunction]
fn random_songs(
    keys: Vec<String>,
    clusters: Vec<usize>,
    cluster: usize,
    count: usize,
) -> PyResult<Vec<String>> {
    let values = Array2::<f32>::zeros((keys.len(), 0));
    let dataset = Dataset::new(keys, Vec::<String>::new(), values)?.with_clusters(clusters)?;
    Ok(pick_random_rows(&dataset, cluster, count, &mut thread_rng())?)
}

#[pymodule]
#[pyo3(name = "pysongdist")]
fn py_songdist(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();
    m.add_function(wrap_pyfunction!(distance_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(labelled_distance_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(distances_to_centroid, m)?)?;
    m.add_function(wrap_pyfunction!(py_normalize, m)?)?;
    m.add_function(wrap_pyfunction!(description, m)?)?;
    m.add_function(wrap_pyfunction!(random_songs, m)?)?;
    Ok(())
}
