pub mod errors;
pub mod http_response;
