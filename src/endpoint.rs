// Endpoint router: the task an endpoint performs is encoded in the
// final path segment of its URL, e.g. `http://host/api/detect`. The
// lookup is case-insensitive; anything else resolves to `Unknown`,
// which the caller reports as "Invalid Endpoint" without crashing and
// without issuing a network call.

/// The inference task selected by the endpoint URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskMode {
    Classify,
    Detect,
    Segment,
    Unknown,
}

impl TaskMode {
    /// Derive the task mode from the URL's final `/`-delimited segment.
    /// A URL ending in `/` has an empty trailing segment and resolves
    /// to `Unknown`, as does any unrecognized name.
    pub fn from_url(url: &str) -> TaskMode {
        let segment = url.rsplit('/').next().unwrap_or("");
        match segment.to_ascii_lowercase().as_str() {
            "classify" => TaskMode::Classify,
            "detect" => TaskMode::Detect,
            "segment" => TaskMode::Segment,
            _ => TaskMode::Unknown,
        }
    }
}
