/// Base URL of the dashboard backend, without a trailing slash.
const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Resolve the backend base URL.
///
/// Natively the process environment wins (loaded through `.env` when
/// present); wasm builds bake the value in at compile time via
/// `AGROVISTA_API_URL`.
pub fn api_url() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dotenvy::dotenv();
        if let Ok(url) = std::env::var("AGROVISTA_API_URL") {
            if !url.is_empty() {
                return url;
            }
        }
    }

    match option_env!("AGROVISTA_API_URL") {
        Some(url) => url.to_string(),
        None => DEFAULT_API_URL.to_string(),
    }
}
