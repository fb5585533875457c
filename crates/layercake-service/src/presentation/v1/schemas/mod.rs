pub mod health_response;
// layercake:modules
