//! Component output buffer.
//!
//! All decoded output of one parse lands in a single append-only byte store,
//! and each component is recorded as a half-open span into it. Spans never
//! move once closed: the store only grows during a parse and is cleared, not
//! shrunk, between parses.

use crate::compat::Vec;
use crate::error::{ParseError, Result};

/// Half-open range into the byte store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: u32,
    pub end: u32,
}

/// Names of the eight recorded components, in parse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Component {
    Scheme = 0,
    Username,
    Password,
    Host,
    Port,
    Path,
    Query,
    Fragment,
}

pub(crate) const COMPONENT_COUNT: usize = 8;

/// Append-only byte store plus the eight component spans.
///
/// The store holds the normalized rebuild of the URI: scheme lowercased,
/// percent-escapes decoded, one canonical delimiter per transition. An
/// IP-literal keeps its `[` `]` in the store (outside the host span) so the
/// rebuild stays unambiguous. A span of `None` means the component is
/// absent; a present span may still be empty (bare `?` or `#`).
#[derive(Debug, Clone, Default)]
pub struct UriBuffer {
    data: Vec<u8>,
    limit: Option<usize>,
    open_at: u32,
    spans: [Option<Span>; COMPONENT_COUNT],
}

impl UriBuffer {
    /// Create an empty buffer with growable storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer that refuses to grow past `capacity` bytes.
    ///
    /// In this mode `push` fails with [`ParseError::CapacityExceeded`]
    /// instead of reallocating. Output is never truncated: an over-long
    /// input fails the whole parse.
    pub fn with_fixed_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            limit: Some(capacity),
            open_at: 0,
            spans: [None; COMPONENT_COUNT],
        }
    }

    /// Drop all stored bytes and spans, keeping the allocation.
    /// Must be called before reuse across parses; the entry points do so.
    pub fn clear(&mut self) {
        self.data.clear();
        self.open_at = 0;
        self.spans = [None; COMPONENT_COUNT];
    }

    /// Pre-reserve for an expected input length (growable mode only).
    pub(crate) fn reserve(&mut self, additional: usize) {
        if self.limit.is_none() {
            self.data.reserve(additional);
        }
    }

    /// Append one byte, amortized O(1).
    pub(crate) fn push(&mut self, byte: u8) -> Result<()> {
        if let Some(limit) = self.limit
            && self.data.len() >= limit
        {
            return Err(ParseError::CapacityExceeded);
        }
        self.data.push(byte);
        Ok(())
    }

    /// Record the current store length as the start of the next span.
    pub(crate) fn open_span(&mut self) {
        self.open_at = self.data.len() as u32;
    }

    /// Close the open span as `component`, covering everything appended
    /// since `open_span`.
    pub(crate) fn close_span(&mut self, component: Component) {
        self.spans[component as usize] = Some(Span {
            start: self.open_at,
            end: self.data.len() as u32,
        });
    }

    pub(crate) fn span(&self, component: Component) -> Option<Span> {
        self.spans[component as usize]
    }

    fn component(&self, component: Component) -> &[u8] {
        match self.spans[component as usize] {
            Some(span) => &self.data[span.start as usize..span.end as usize],
            None => &[],
        }
    }

    /// The full normalized URI rebuilt from the parse.
    pub fn uri(&self) -> &[u8] {
        &self.data
    }

    /// Lowercased scheme, without the trailing `:`.
    pub fn scheme(&self) -> &[u8] {
        self.component(Component::Scheme)
    }

    pub fn username(&self) -> &[u8] {
        self.component(Component::Username)
    }

    pub fn password(&self) -> &[u8] {
        self.component(Component::Password)
    }

    /// Host as parsed. Deliberately loose: any reg-name-shaped string is
    /// accepted, IPv4 octets and IPv6 hextets are not range-checked.
    /// Semantic address validation is the caller's concern.
    pub fn host(&self) -> &[u8] {
        self.component(Component::Host)
    }

    pub fn port(&self) -> &[u8] {
        self.component(Component::Port)
    }

    pub fn path(&self) -> &[u8] {
        self.component(Component::Path)
    }

    /// Query bytes, empty for both a bare `?` and no query at all;
    /// `has_query` tells the two apart.
    pub fn query(&self) -> &[u8] {
        self.component(Component::Query)
    }

    pub fn fragment(&self) -> &[u8] {
        self.component(Component::Fragment)
    }

    pub fn has_username(&self) -> bool {
        self.spans[Component::Username as usize].is_some()
    }

    pub fn has_password(&self) -> bool {
        self.spans[Component::Password as usize].is_some()
    }

    pub fn has_port(&self) -> bool {
        self.spans[Component::Port as usize].is_some()
    }

    /// True for `http://h?` (present but empty), false for `http://h`.
    pub fn has_query(&self) -> bool {
        self.spans[Component::Query as usize].is_some()
    }

    /// True for `http://h#` (present but empty), false for `http://h`.
    pub fn has_fragment(&self) -> bool {
        self.spans[Component::Fragment as usize].is_some()
    }

    #[cfg(test)]
    pub(crate) fn spans(&self) -> &[Option<Span>; COMPONENT_COUNT] {
        &self.spans
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_spans() {
        let mut buf = UriBuffer::new();
        buf.open_span();
        for b in b"http" {
            buf.push(*b).unwrap();
        }
        buf.close_span(Component::Scheme);
        buf.push(b':').unwrap();
        assert_eq!(buf.scheme(), b"http");
        assert_eq!(buf.uri(), b"http:");
        assert!(!buf.has_query());
        assert_eq!(buf.host(), b"");
    }

    #[test]
    fn test_empty_span_is_present() {
        let mut buf = UriBuffer::new();
        buf.open_span();
        buf.close_span(Component::Query);
        assert!(buf.has_query());
        assert_eq!(buf.query(), b"");
        assert!(!buf.has_fragment());
    }

    #[test]
    fn test_fixed_capacity_refuses_to_grow() {
        let mut buf = UriBuffer::with_fixed_capacity(3);
        assert_eq!(buf.push(b'a'), Ok(()));
        assert_eq!(buf.push(b'b'), Ok(()));
        assert_eq!(buf.push(b'c'), Ok(()));
        assert_eq!(buf.push(b'd'), Err(ParseError::CapacityExceeded));
        // Nothing was truncated or dropped below the limit.
        assert_eq!(buf.uri(), b"abc");
    }

    #[test]
    fn test_clear_resets_spans() {
        let mut buf = UriBuffer::new();
        buf.open_span();
        buf.push(b'x').unwrap();
        buf.close_span(Component::Host);
        buf.clear();
        assert_eq!(buf.uri(), b"");
        assert_eq!(buf.host(), b"");
        assert!(buf.span(Component::Host).is_none());
    }
}
