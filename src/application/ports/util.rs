// src/application/ports/util.rs
pub trait SegmentEncoder: Send + Sync {
    /// Percent-encode `input` for use as a single URL path segment.
    fn encode_segment(&self, input: &str) -> String;
}
