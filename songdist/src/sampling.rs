use std::hash::Hash;

use ndarray_rand::rand::Rng;

use crate::{
    dataset::Dataset,
    error::{Result, SongDistError},
};

/// Picks the key of a row chosen uniformly at random.
pub fn pick_random_row<'a, K, R: Rng + ?Sized>(dataset: &'a Dataset<K>, rng: &mut R) -> Result<&'a K> {
    if dataset.is_empty() {
        return Err(SongDistError::NoCandidates);
    }
    let index = rng.gen_range(0..dataset.num_rows());
    log::trace!("picked row {index} of {}", dataset.num_rows());
    dataset.key_at(index)
}

/// Picks `count` keys among the rows labelled `cluster`, independently and
/// with replacement: the same key may appear more than once.
pub fn pick_random_rows<K: Clone + Eq + Hash, R: Rng + ?Sized>(
    dataset: &Dataset<K>,
    cluster: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<K>> {
    let members = dataset.subset(dataset.cluster_rows(cluster)?)?;
    if members.is_empty() {
        return Err(SongDistError::NoCandidates);
    }
    log::debug!(
        "sampling {count} of {} rows in cluster {cluster}",
        members.num_rows()
    );
    (0..count)
        .map(|_| pick_random_row(&members, &mut *rng).cloned())
        .collect()
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use ndarray::prelude::*;
    use ndarray_rand::rand::{rngs::StdRng, SeedableRng};

    use super::{pick_random_row, pick_random_rows};
    use crate::{
        dataset::{Dataset, SongKey},
        error::SongDistError,
        test::make_songs,
    };

    #[test]
    fn test_every_row_reachable() {
        let data = make_songs(5, &["energy"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(pick_random_row(&data, &mut rng).unwrap().clone());
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_empty_dataset() {
        let data = Dataset::<SongKey>::new(vec![], ["energy"], Array2::<f32>::zeros((0, 1))).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            pick_random_row(&data, &mut rng).unwrap_err(),
            SongDistError::NoCandidates
        );
    }

    #[test]
    fn test_cluster_membership() {
        let data = make_songs(30, &["energy", "valence"])
            .with_clusters((0..30).map(|i| i % 3))
            .unwrap();
        let members: HashSet<SongKey> = data
            .cluster_rows(1)
            .unwrap()
            .into_iter()
            .map(|i| data.keys()[i].clone())
            .collect();

        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick_random_rows(&data, 1, 25, &mut rng).unwrap();
        assert_eq!(picked.len(), 25);
        assert!(picked.iter().all(|k| members.contains(k)));

        assert!(pick_random_rows(&data, 2, 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_deterministic_with_seed() {
        let data = make_songs(30, &["energy"])
            .with_clusters(vec![0; 30])
            .unwrap();
        let a = pick_random_rows(&data, 0, 10, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = pick_random_rows(&data, 0, 10, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_candidates() {
        let data = make_songs(4, &["energy"]).with_clusters([0, 0, 1, 1]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            pick_random_rows(&data, 2, 3, &mut rng).unwrap_err(),
            SongDistError::NoCandidates
        );
        let unlabelled = make_songs(4, &["energy"]);
        assert_eq!(
            pick_random_rows(&unlabelled, 0, 3, &mut rng).unwrap_err(),
            SongDistError::MissingClusters
        );
    }
}
