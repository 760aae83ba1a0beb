use crate::application::ports::util::SegmentEncoder;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters gets escaped, `/`
/// included.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Default, Clone, Copy)]
pub struct PercentSegmentEncoder;

impl SegmentEncoder for PercentSegmentEncoder {
    fn encode_segment(&self, input: &str) -> String {
        utf8_percent_encode(input, PATH_SEGMENT).to_string()
    }
}
