//! Region-derived API hosts.

/// Host serving resources in the `global` location.
pub const GLOBAL_API_HOST: &str = "dialogflow.googleapis.com";

/// The API host for resources stored in `location`.
///
/// Regional agents are only reachable through their regional host.
pub fn api_host_for_location(location: &str) -> String {
    if location == "global" {
        GLOBAL_API_HOST.to_string()
    } else {
        format!("{location}-{GLOBAL_API_HOST}")
    }
}

/// The `locations/<L>` segment of any resource path, if present.
pub fn location_of(resource_name: &str) -> Option<&str> {
    let mut parts = resource_name.split('/');
    while let Some(key) = parts.next() {
        let value = parts.next()?;
        if key == "locations" {
            return Some(value).filter(|v| !v.is_empty());
        }
    }
    None
}
