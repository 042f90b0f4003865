mod handlers;
mod types;

pub use handlers::{get_ruche, list_ruches, nearby_ruches};
pub use types::{NearbyQuery, RuchesQuery};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{__path_get_ruche, __path_list_ruches, __path_nearby_ruches};
