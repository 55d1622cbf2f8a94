//! RFC 3986 character classification.
//!
//! Every predicate is total over the full byte range. Control bytes
//! (including CR, LF, tab and space) and bytes >= 0x80 belong to no class,
//! so any state that consults a predicate rejects them outright. This is the
//! first line of defense against control-character smuggling: a byte is only
//! ever copied into a component after a predicate said it is legal there.

const ALPHA: u16 = 1 << 0;
const DIGIT: u16 = 1 << 1;
const HEX_DIGIT: u16 = 1 << 2;
const UNRESERVED: u16 = 1 << 3;
const SUB_DELIMS: u16 = 1 << 4;
const GEN_DELIMS: u16 = 1 << 5;
const PCHAR: u16 = 1 << 6;
const QCHAR: u16 = 1 << 7;
const UCHAR: u16 = 1 << 8;
const HSEGMENT: u16 = 1 << 9;
const SCHEME: u16 = 1 << 10;

/// Class membership for every byte value, built once at compile time.
const CLASS_TABLE: [u16; 256] = {
    let mut table = [0u16; 256];
    let mut i = 0usize;
    while i < 256 {
        let c = i as u8;

        let alpha = c.is_ascii_lowercase() || c.is_ascii_uppercase();
        let digit = c.is_ascii_digit();
        let hex = digit || matches!(c, b'a'..=b'f' | b'A'..=b'F');
        let unreserved = alpha || digit || matches!(c, b'-' | b'.' | b'_' | b'~');
        let sub_delims = matches!(
            c,
            b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
        );
        let gen_delims = matches!(c, b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@');
        let pchar = unreserved || sub_delims || c == b':' || c == b'@';
        let qchar = pchar || c == b'/' || c == b'?';
        let uchar = unreserved || matches!(c, b';' | b'?' | b'&' | b'=');
        let hsegment = uchar || c == b':' || c == b'@';
        let scheme = alpha || digit || matches!(c, b'+' | b'-' | b'.');

        let mut bits = 0u16;
        if alpha {
            bits |= ALPHA;
        }
        if digit {
            bits |= DIGIT;
        }
        if hex {
            bits |= HEX_DIGIT;
        }
        if unreserved {
            bits |= UNRESERVED;
        }
        if sub_delims {
            bits |= SUB_DELIMS;
        }
        if gen_delims {
            bits |= GEN_DELIMS;
        }
        if pchar {
            bits |= PCHAR;
        }
        if qchar {
            bits |= QCHAR;
        }
        if uchar {
            bits |= UCHAR;
        }
        if hsegment {
            bits |= HSEGMENT;
        }
        if scheme {
            bits |= SCHEME;
        }
        table[i] = bits;
        i += 1;
    }
    table
};

fn has_class(b: u8, class: u16) -> bool {
    CLASS_TABLE[b as usize] & class != 0
}

/// ALPHA = %x41-5A / %x61-7A
pub fn is_alpha(b: u8) -> bool {
    has_class(b, ALPHA)
}

/// DIGIT = %x30-39
pub fn is_digit(b: u8) -> bool {
    has_class(b, DIGIT)
}

/// HEXDIG, both cases
pub fn is_hex_digit(b: u8) -> bool {
    has_class(b, HEX_DIGIT)
}

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub fn is_unreserved(b: u8) -> bool {
    has_class(b, UNRESERVED)
}

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
pub fn is_sub_delims(b: u8) -> bool {
    has_class(b, SUB_DELIMS)
}

/// gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"
pub fn is_gen_delims(b: u8) -> bool {
    has_class(b, GEN_DELIMS)
}

/// pchar = unreserved / sub-delims / ":" / "@"
pub fn is_pchar(b: u8) -> bool {
    has_class(b, PCHAR)
}

/// qchar = pchar / "/" / "?"
pub fn is_qchar(b: u8) -> bool {
    has_class(b, QCHAR)
}

/// uchar = unreserved / ";" / "?" / "&" / "="
pub fn is_uchar(b: u8) -> bool {
    has_class(b, UCHAR)
}

/// hsegment = uchar / ":" / "@"
pub fn is_hsegment(b: u8) -> bool {
    has_class(b, HSEGMENT)
}

/// Bytes legal after the leading ALPHA of a scheme.
pub fn is_scheme_char(b: u8) -> bool {
    has_class(b, SCHEME)
}

/// Bytes legal in username and password (escapes handled separately).
pub fn is_userinfo_char(b: u8) -> bool {
    has_class(b, UCHAR | SUB_DELIMS)
}

/// Bytes legal in an IPv4 or registered-name host (escapes handled separately).
pub fn is_reg_name_char(b: u8) -> bool {
    has_class(b, UNRESERVED | SUB_DELIMS)
}
