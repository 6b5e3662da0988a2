use ndarray::{prelude::*, Data};

use crate::{
    dataset::Dataset,
    error::{Result, SongDistError},
    features::FeatureCatalog,
};

/// Min-max rescaling: `(v - min) / (max - min)` for every value.
///
/// The bounds are those of the feature, not of `values`, so results may
/// fall outside `[0, 1]`.
pub fn normalize<S: Data<Elem = f32>>(
    values: &ArrayBase<S, Ix1>,
    min: f32,
    max: f32,
) -> Result<Array1<f32>> {
    if max == min {
        return Err(SongDistError::DegenerateBounds(min));
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(SongDistError::NonFiniteBounds { min, max });
    }
    let range = max - min;
    Ok(values.mapv(|v| (v - min) / range))
}

/// Normalizes `values` using the range `catalog` records for `feature`.
pub fn normalize_feature<S, C>(
    values: &ArrayBase<S, Ix1>,
    feature: &str,
    catalog: &C,
) -> Result<Array1<f32>>
where
    S: Data<Elem = f32>,
    C: FeatureCatalog + ?Sized,
{
    let info = catalog
        .info(feature)
        .ok_or_else(|| SongDistError::UnknownFeature(feature.to_owned()))?;
    let max = info
        .max
        .ok_or_else(|| SongDistError::UnboundedFeature(feature.to_owned()))?;
    normalize(values, info.min, max)
}

/// Normalizes the column `feature` of `dataset`.
pub fn normalize_column<K, C: FeatureCatalog + ?Sized>(
    dataset: &Dataset<K>,
    feature: &str,
    catalog: &C,
) -> Result<Array1<f32>> {
    let idx = dataset.column_index(feature)?;
    normalize_feature(&dataset.values().column(idx), feature, catalog)
}
