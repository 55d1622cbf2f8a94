/// Errors that can occur during URI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input violates the grammar at the current position: an illegal
    /// byte, a missing mandatory delimiter, a malformed percent-escape, an
    /// unterminated IP-literal, or an ambiguous double delimiter. Always
    /// fatal; the whole input must be treated as rejected.
    Syntax,
    /// The output buffer has a fixed capacity and ran out of room. Data is
    /// never silently truncated; the caller may retry with larger storage.
    CapacityExceeded,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::Syntax => "URI syntax error",
            Self::CapacityExceeded => "URI buffer capacity exceeded",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URI parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
