//! UTF-8 octet classification.
//!
//! The splitter checks sequence structure one byte at a time: lead bytes
//! announce how many continuation octets follow, continuation octets must
//! appear exactly where expected. Overlong forms and surrogates are not
//! rejected; clipboard text is trusted to that extent.

/// What a single byte means to the line scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octet {
    /// `0x00`, trailing platform noise.
    Nul,
    /// `0x0A`
    LineFeed,
    /// `0x0D`
    CarriageReturn,
    /// Any other 7-bit code.
    Ascii,
    /// `0x80..=0xBF`, extends a multi-byte sequence.
    Continuation,
    /// Starts a multi-byte sequence needing this many continuation octets
    /// (1, 2 or 3).
    Lead(u8),
    /// `0xF8..=0xFF`, never valid in UTF-8.
    Invalid,
}

/// Classifies one byte.
///
/// # Examples
///
/// ```
/// use neoclip::io::unicode::{Octet, classify_octet};
///
/// assert_eq!(classify_octet(b'a'), Octet::Ascii);
/// assert_eq!(classify_octet(0xE2), Octet::Lead(2));
/// assert_eq!(classify_octet(0x82), Octet::Continuation);
/// ```
#[must_use]
pub const fn classify_octet(byte: u8) -> Octet {
    match byte {
        0x00 => Octet::Nul,
        b'\n' => Octet::LineFeed,
        b'\r' => Octet::CarriageReturn,
        0x01..=0x7F => Octet::Ascii,
        0x80..=0xBF => Octet::Continuation,
        0xC0..=0xDF => Octet::Lead(1),
        0xE0..=0xEF => Octet::Lead(2),
        0xF0..=0xF7 => Octet::Lead(3),
        0xF8..=0xFF => Octet::Invalid,
    }
}
