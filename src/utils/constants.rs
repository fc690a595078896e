/// Backend base URL, resolved at compile time via the BACKEND_URL env var.
/// Defaults to the local admin backend during development.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};
