pub mod api_helpers;
pub mod utils;
