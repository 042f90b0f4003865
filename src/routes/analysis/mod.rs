mod handlers;
mod types;

pub use handlers::{get_clusters, get_distance, reverse_geocode, validate_coords};
pub use types::{
    ClustersQuery, ClustersResponse, CoordinatePair, DistanceQuery, DistanceResponse,
    ReverseGeocodeQuery, ReverseGeocodeResponse, ValidateCoordsRequest, ValidateCoordsResponse,
};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{
    __path_get_clusters, __path_get_distance, __path_reverse_geocode, __path_validate_coords,
};
