/// URI schemes known to the parser.
///
/// Recognition is informational except for `file`, whose empty-authority
/// form (`file:///path`) gets special slash handling in the engine. Unknown
/// schemes are legal and simply map to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownScheme {
    Ftp,
    File,
    Gopher,
    Http,
    Https,
    Ws,
    Wss,
}

impl KnownScheme {
    /// The normalized (lowercase) scheme text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ftp => "ftp",
            Self::File => "file",
            Self::Gopher => "gopher",
            Self::Http => "http",
            Self::Https => "https",
            Self::Ws => "ws",
            Self::Wss => "wss",
        }
    }

    /// Default port for the scheme, where one exists.
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::Gopher => Some(70),
            Self::File => None,
        }
    }
}

/// Look up a known scheme from already-lowercased scheme bytes.
/// Filters by length + first byte to minimize comparisons.
pub(crate) fn lookup(scheme: &[u8]) -> Option<KnownScheme> {
    match (scheme.len(), scheme.first()) {
        (2, Some(b'w')) if scheme == b"ws" => Some(KnownScheme::Ws),
        (3, Some(b'w')) if scheme == b"wss" => Some(KnownScheme::Wss),
        (3, Some(b'f')) if scheme == b"ftp" => Some(KnownScheme::Ftp),
        (4, Some(b'h')) if scheme == b"http" => Some(KnownScheme::Http),
        (4, Some(b'f')) if scheme == b"file" => Some(KnownScheme::File),
        (5, Some(b'h')) if scheme == b"https" => Some(KnownScheme::Https),
        (6, Some(b'g')) if scheme == b"gopher" => Some(KnownScheme::Gopher),
        _ => None,
    }
}
