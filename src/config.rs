
/// Public list of countries consumed by the country picker.
pub const COUNTRIES_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,flags,cca2";

#[cfg(debug_assertions)]
const DEFAULT_API_URL: &str = "http://localhost:8000"; // Development URL when running locally

#[cfg(not(debug_assertions))]
const DEFAULT_API_URL: &str = "https://api.jalicreatorslabel.com";

/// Base URL of the forms API. `JALI_API_URL` at build time overrides the default.
pub fn api_base_url() -> &'static str {
    match option_env!("JALI_API_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_URL,
    }
}

/// Joins `path` onto `base` without doubling the slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(
            endpoint("https://api.example.com/", "/api/forms/register"),
            "https://api.example.com/api/forms/register"
        );
        assert_eq!(endpoint("http://localhost:8000", "api/x"), "http://localhost:8000/api/x");
    }

    #[test]
    fn api_base_url_is_never_empty() {
        assert!(!api_base_url().is_empty());
    }
}
