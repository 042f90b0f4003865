mod handlers;
mod types;

pub use handlers::{get_rucher, list_ruchers};
pub use types::RuchersQuery;

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{__path_get_rucher, __path_list_ruchers};
