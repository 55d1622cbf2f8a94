#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// RFC 3986 character classes (public: callers validating their own
// sub-grammars need the same predicates the engine uses)
pub mod character_sets;

// Internal modules (not public API)
mod buffer;
mod error;
mod parser;
mod percent;
mod scheme;
mod uri;

// Public API
pub use buffer::UriBuffer;
pub use error::ParseError;
pub use parser::{
    parse_absolute_form, parse_asterisk_form, parse_authority_form, parse_origin_form,
};
pub use scheme::KnownScheme;
pub use uri::Uri;

pub type Result<T> = core::result::Result<T, ParseError>;
