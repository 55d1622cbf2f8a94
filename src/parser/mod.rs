mod engine;
mod state;

pub(crate) use state::State;

use crate::buffer::UriBuffer;
use crate::error::Result;

/// Parse a request target in absolute form:
/// `scheme "://" [userinfo "@"] host [":" port] [path] ["?" query] ["#" fragment]`.
///
/// `out` is cleared first; on success it holds the normalized byte rebuild
/// and the component spans. On error no part of `out` is meaningful.
pub fn parse_absolute_form(input: &str, out: &mut UriBuffer) -> Result<()> {
    engine::absolute_form(input.as_bytes(), out)
}

/// Parse a request target in origin form: `absolute-path [ "?" query ]`.
pub fn parse_origin_form(input: &str, out: &mut UriBuffer) -> Result<()> {
    engine::origin_form(input.as_bytes(), out)
}

/// Parse a CONNECT request target: `host [ ":" port ]`, userinfo tolerated.
pub fn parse_authority_form(input: &str, out: &mut UriBuffer) -> Result<()> {
    engine::authority_form(input.as_bytes(), out)
}

/// Parse a server-wide OPTIONS request target: exactly `*`.
pub fn parse_asterisk_form(input: &str, out: &mut UriBuffer) -> Result<()> {
    engine::asterisk_form(input.as_bytes(), out)
}
