//! Paths of the feedback API, shared by the server routes and the HTTP client
//! so both sides agree on the exact request target.

/// Collection endpoint: `GET` lists records, `POST` creates one.
pub const FEEDBACK_API_PATH: &str = "/api/feedback";

pub fn feedback_collection_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), FEEDBACK_API_PATH)
}

/// Item endpoint used by `DELETE`: the id becomes a single, percent-encoded
/// path segment after a `/`.
pub fn feedback_item_url(base_url: &str, id: &str) -> String {
    format!("{}/{}", feedback_collection_url(base_url), encode_path_segment(id))
}

/// Percent-encodes everything except RFC 3986 unreserved characters.
fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
