//! Point clustering over geographic coordinates.
//!
//! Two independent modes: density-based (DBSCAN) with meter-based eps and
//! explicit noise labeling, and partition-based (K-means) with a fixed,
//! caller-specified cluster count. Both are stateless transformations over the
//! point set fetched at call time; the algorithms themselves come from
//! `linfa-clustering`.

use std::collections::BTreeMap;

use linfa::DatasetBase;
use linfa::traits::{Fit, Predict, Transformer};
use linfa_clustering::{Dbscan, KMeans};
use ndarray::Array2;
use rand_xoshiro::Xoshiro256Plus;
use rand_xoshiro::rand_core::SeedableRng;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Meters per degree at the equator. The eps conversion uses this fixed
/// constant, so DBSCAN neighborhoods shrink in real terms at high latitudes.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Seed for K-means centroid initialization: the same dataset always yields
/// the same partition.
const KMEANS_SEED: u64 = 42;

/// DBSCAN noise label.
pub const NOISE: i64 = -1;

#[derive(Debug, Clone, Serialize)]
pub struct ClusterMember {
    /// Index into the input point slice.
    pub index: usize,
    /// (longitude, latitude) of the member point.
    pub coordinates: [f64; 2],
}

/// Outcome of a DBSCAN run: one label per input point (`-1` for noise), the
/// number of clusters found (noise excluded), and the members of each cluster.
#[derive(Debug, Clone, Serialize)]
pub struct DbscanResult {
    pub labels: Vec<i64>,
    pub n_clusters: usize,
    pub clusters: BTreeMap<i64, Vec<ClusterMember>>,
}

impl DbscanResult {
    fn all_noise(n: usize) -> Self {
        Self {
            labels: vec![NOISE; n],
            n_clusters: 0,
            clusters: BTreeMap::new(),
        }
    }

    fn from_labels(points: &[(f64, f64)], labels: Vec<i64>) -> Self {
        let mut clusters: BTreeMap<i64, Vec<ClusterMember>> = BTreeMap::new();
        for (index, (&label, &(lon, lat))) in labels.iter().zip(points).enumerate() {
            if label == NOISE {
                continue;
            }
            clusters.entry(label).or_default().push(ClusterMember {
                index,
                coordinates: [lon, lat],
            });
        }

        Self {
            n_clusters: clusters.len(),
            labels,
            clusters,
        }
    }
}

/// Cluster (longitude, latitude) points with DBSCAN.
///
/// `eps_meters` is converted to degrees with the equatorial approximation
/// [`METERS_PER_DEGREE`]. Empty input, or fewer points than `min_samples`,
/// yields an all-noise labeling without invoking the algorithm.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a non-positive `eps_meters` and
/// `AppError::Internal` when the clustering library rejects the input.
pub fn cluster_points(
    points: &[(f64, f64)],
    eps_meters: f64,
    min_samples: usize,
) -> AppResult<DbscanResult> {
    if !(eps_meters > 0.0) {
        return Err(AppError::BadRequest("eps must be positive".to_string()));
    }
    if points.is_empty() || points.len() < min_samples {
        return Ok(DbscanResult::all_noise(points.len()));
    }

    let eps_degrees = eps_meters / METERS_PER_DEGREE;
    let observations = to_observations(points.iter().map(|&(lon, lat)| (lon, lat)));

    // The library rejects min_points < 2. With min_samples <= 1 every point is
    // a core point, which only differs from a min_points = 2 run for isolated
    // points: those become singleton clusters instead of noise.
    let min_points = min_samples.max(2);
    let promote_noise = min_samples <= 1;

    let memberships = Dbscan::params(min_points)
        .tolerance(eps_degrees)
        .transform(&observations)
        .map_err(|e| AppError::Internal(format!("DBSCAN failed: {e}")))?;

    let mut labels: Vec<i64> = memberships
        .iter()
        .map(|m| m.map_or(NOISE, |c| c as i64))
        .collect();

    if promote_noise {
        let mut next = labels.iter().copied().max().unwrap_or(NOISE) + 1;
        for label in &mut labels {
            if *label == NOISE {
                *label = next;
                next += 1;
            }
        }
    }

    Ok(DbscanResult::from_labels(points, labels))
}

/// A point carrying its source record's identity, for K-means output.
#[derive(Debug, Clone)]
pub struct LabeledPoint {
    pub id: i32,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KmeansMember {
    pub id: i32,
    pub name: String,
    /// (longitude, latitude) of the member point.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KmeansCluster {
    pub cluster_id: usize,
    /// Cluster centroid as (longitude, latitude).
    pub center: [f64; 2],
    pub features: Vec<KmeansMember>,
}

/// Partition all points into exactly `n_clusters` K-means clusters.
///
/// Centroid initialization is seeded, so repeated calls over the same dataset
/// return the same partition.
///
/// # Errors
///
/// Returns `AppError::InsufficientData` when fewer points exist than
/// `n_clusters`, and `AppError::Internal` when fitting fails.
pub fn kmeans_clusters(points: &[LabeledPoint], n_clusters: usize) -> AppResult<Vec<KmeansCluster>> {
    if points.len() < n_clusters {
        return Err(AppError::InsufficientData(format!(
            "Need at least {n_clusters} ruches to cluster"
        )));
    }

    let observations = to_observations(points.iter().map(|p| (p.longitude, p.latitude)));
    let dataset = DatasetBase::from(observations.clone());

    let rng = Xoshiro256Plus::seed_from_u64(KMEANS_SEED);
    let model = KMeans::params_with_rng(n_clusters, rng)
        .fit(&dataset)
        .map_err(|e| AppError::Internal(format!("K-means failed: {e}")))?;

    let labels = model.predict(&observations);
    let centroids = model.centroids();

    let mut clusters: BTreeMap<usize, KmeansCluster> = BTreeMap::new();
    for (point, &label) in points.iter().zip(labels.iter()) {
        let entry = clusters.entry(label).or_insert_with(|| KmeansCluster {
            cluster_id: label,
            center: [centroids[[label, 0]], centroids[[label, 1]]],
            features: Vec::new(),
        });
        entry.features.push(KmeansMember {
            id: point.id,
            name: point.name.clone(),
            coordinates: [point.longitude, point.latitude],
        });
    }

    Ok(clusters.into_values().collect())
}

fn to_observations(points: impl ExactSizeIterator<Item = (f64, f64)>) -> Array2<f64> {
    let mut observations = Array2::zeros((points.len(), 2));
    for (i, (lon, lat)) in points.enumerate() {
        observations[[i, 0]] = lon;
        observations[[i, 1]] = lat;
    }
    observations
}
