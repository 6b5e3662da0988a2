pub mod euclideandata;
pub mod manhattandata;

/// A set of points together with a distance between any two of them.
pub trait MetricData {
    fn distance(&self, i: usize, j: usize) -> f32;
    fn all_distances(&self, j: usize, out: &mut [f32]);
    fn num_points(&self) -> usize;
    fn dimensions(&self) -> usize;
}

pub use self::euclideandata::EuclideanData;
pub use self::manhattandata::ManhattanData;
