//! URL construction for actuator endpoints.

use url::Url;

use crate::error::ActuatorResult;

/// Path segment of the health endpoint below the base URL.
pub const HEALTH_PATH: &str = "health";

/// Build the health endpoint URL from the base URL and path segment.
///
/// A trailing `/` on the base is dropped so `http://h/manage/` and
/// `http://h/manage` both yield `http://h/manage/health`. Query and fragment
/// of the base are discarded.
pub fn build_health_url(base_url: &str, health_path: &str) -> ActuatorResult<Url> {
    let mut url = Url::parse(base_url.trim())?;

    let base_path = url.path().trim_end_matches('/').to_string();
    let segment = health_path.trim_matches('/');
    url.set_path(&format!("{base_path}/{segment}"));
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
