//! Cross-origin policy for browser clients.
//!
//! Origins are matched exactly against the configured list, which includes
//! the literal `null` origin sent by pages opened from the local filesystem.
//! Every method and header is allowed. Credentials are not.

use std::collections::HashSet;

use actix_cors::Cors;

/// Origins allowed regardless of configuration.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] =
    ["http://127.0.0.1:8000", "http://localhost:8000", "null"];

/// Preflight cache lifetime in seconds.
const PREFLIGHT_MAX_AGE: usize = 3600;

/// Default origins followed by `extra`, without duplicates.
///
/// # Examples
/// ```
/// use area_calculator::inbound::http::cors::allowed_origins;
///
/// let origins = allowed_origins(["https://calc.example", "null"]);
/// assert_eq!(origins.len(), 4);
/// assert_eq!(origins.last().map(String::as_str), Some("https://calc.example"));
/// ```
pub fn allowed_origins<I, S>(extra: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|origin| (*origin).to_owned())
        .chain(
            extra
                .into_iter()
                .map(|origin| origin.as_ref().trim().to_owned())
                .filter(|origin| !origin.is_empty()),
        )
        .filter(|origin| seen.insert(origin.clone()))
        .collect()
}

/// Build the CORS middleware for the given origin list.
pub fn cors_policy(origins: &[String]) -> Cors {
    let allowed: HashSet<String> = origins.iter().cloned().collect();
    Cors::default()
        .allowed_origin_fn(move |origin, _head| {
            origin
                .to_str()
                .is_ok_and(|value| allowed.contains(value))
        })
        .allow_any_method()
        .allow_any_header()
        .max_age(PREFLIGHT_MAX_AGE)
}
