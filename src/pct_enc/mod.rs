//! Percent-encoding utilities.
//!
//! Unlike a validating URI library, nothing here rejects its input:
//! a `'%'` that does not start a well-formed octet is simply kept as is.

pub mod table;

pub use table::Table;

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{iter::FusedIterator, str};

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, returning `None` if either byte is not hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> Option<u8> {
    let (hi, lo) = (OCTET_TABLE_HI[hi as usize], OCTET_TABLE_LO[lo as usize]);
    (hi != 0xff && lo != 0xff).then_some(hi | lo)
}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// An iterator used to decode a percent-encoded string slice.
///
/// This struct is created by [`decode`]. Normally you'll use the methods below
/// instead of iterating over a `Decode` manually.
///
/// See the [`DecodedChunk`] type for documentation of the items yielded by this iterator.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Decode<'a> {
    source: &'a str,
}

/// An item returned by the [`Decode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodedChunk<'a> {
    /// An unencoded subslice.
    Unencoded(&'a str),
    /// A percent-encoded octet, decoded (for example, `"%20"` decoded as `0x20`).
    PctDecoded(u8),
}

/// Returns an iterator used to decode the given string.
///
/// A `'%'` not followed by two hexadecimal digits is yielded unencoded.
/// Note that `U+002B` (+) is **not** decoded as `0x20` (space).
///
/// # Examples
///
/// ```
/// use lenient_uri::pct_enc;
///
/// assert_eq!(pct_enc::decode("%C2%A1Hola%21").to_string().unwrap(), "¡Hola!");
/// assert_eq!(pct_enc::decode("100%").to_string().unwrap(), "100%");
/// assert_eq!(pct_enc::decode("%zz%4").to_string().unwrap(), "%zz%4");
/// ```
pub fn decode(s: &str) -> Decode<'_> {
    Decode { source: s }
}

impl<'a> Decode<'a> {
    /// Returns the length of the leading run that decodes to itself.
    fn unencoded_len(&self) -> usize {
        let bytes = self.source.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                if let [hi, lo, ..] = bytes[i + 1..] {
                    if decode_octet(hi, lo).is_some() {
                        break;
                    }
                }
            }
            i += 1;
        }
        i
    }

    fn decoded_len(&self) -> usize {
        self.clone()
            .map(|chunk| match chunk {
                DecodedChunk::Unencoded(s) => s.len(),
                DecodedChunk::PctDecoded(_) => 1,
            })
            .sum()
    }

    fn borrow_all_or_prep_buf(&mut self) -> Result<&'a str, Vec<u8>> {
        let i = self.unencoded_len();
        if i == self.source.len() {
            return Ok(self.source);
        }
        let mut buf = Vec::with_capacity(self.decoded_len());
        let s;
        (s, self.source) = self.source.split_at(i);
        buf.extend_from_slice(s.as_bytes());
        Err(buf)
    }

    /// Decodes the slice to bytes.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    #[must_use]
    pub fn to_bytes(mut self) -> Cow<'a, [u8]> {
        let mut buf = match self.borrow_all_or_prep_buf() {
            Ok(s) => return Cow::Borrowed(s.as_bytes()),
            Err(buf) => buf,
        };

        for chunk in self {
            match chunk {
                DecodedChunk::Unencoded(s) => buf.extend_from_slice(s.as_bytes()),
                DecodedChunk::PctDecoded(x) => buf.push(x),
            }
        }
        Cow::Owned(buf)
    }

    /// Attempts to decode the slice to a string.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    ///
    /// # Errors
    ///
    /// Returns `Err` containing the decoded bytes if they are not valid UTF-8.
    pub fn to_string(self) -> Result<Cow<'a, str>, Vec<u8>> {
        match self.to_bytes() {
            // The source is a string slice, so unencoded bytes are valid UTF-8.
            Cow::Borrowed(bytes) => Ok(Cow::Borrowed(
                str::from_utf8(bytes).map_err(|_| bytes.to_vec())?,
            )),
            Cow::Owned(vec) => String::from_utf8(vec)
                .map(Cow::Owned)
                .map_err(|e| e.into_bytes()),
        }
    }

    /// Decodes the slice to a string, replacing any invalid UTF-8 sequences with
    /// [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
    ///
    /// [U+FFFD]: char::REPLACEMENT_CHARACTER
    #[must_use]
    pub fn to_string_lossy(self) -> Cow<'a, str> {
        match self.to_string() {
            Ok(s) => s,
            Err(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }

    /// Decodes the slice to a string, mapping every decoded octet to the
    /// code point of the same value (U+0000 to U+00FF).
    ///
    /// Multi-byte UTF-8 sequences are **not** reassembled: `"%C3%A9"`
    /// decodes to `"Ã©"`, not `"é"`.
    #[must_use]
    pub fn to_string_by_byte(mut self) -> Cow<'a, str> {
        let mut buf = match self.borrow_all_or_prep_buf() {
            Ok(s) => return Cow::Borrowed(s),
            // Only unencoded bytes so far, which came from a string slice.
            Err(buf) => String::from_utf8_lossy(&buf).into_owned(),
        };

        for chunk in self {
            match chunk {
                DecodedChunk::Unencoded(s) => buf.push_str(s),
                DecodedChunk::PctDecoded(x) => buf.push(char::from(x)),
            }
        }
        Cow::Owned(buf)
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = DecodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            return None;
        }
        let i = self.unencoded_len();
        if i == 0 {
            let bytes = self.source.as_bytes();
            // `unencoded_len` stops only before a well-formed octet.
            let x = decode_octet(bytes[1], bytes[2])?;
            self.source = &self.source[3..];
            Some(DecodedChunk::PctDecoded(x))
        } else {
            let s;
            (s, self.source) = self.source.split_at(i);
            Some(DecodedChunk::Unencoded(s))
        }
    }
}

impl FusedIterator for Decode<'_> {}

/// An iterator used to percent-encode a string slice.
///
/// Characters allowed by the table are yielded as is, while every byte of
/// any other character (all non-ASCII characters included) is percent-encoded.
///
/// This struct is created by [`encode`]. Normally you'll use [`encode_to_cow`]
/// instead, unless you need precise control over allocation.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Encode<'s> {
    table: Table,
    source: &'s str,
    to_enc: &'s [u8],
}

/// An item returned by the [`Encode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodedChunk<'a> {
    /// An unencoded subslice.
    Unencoded(&'a str),
    /// A byte, percent-encoded (for example, `0x20` encoded as `"%20"`).
    PctEncoded(&'static str),
}

impl<'a> EncodedChunk<'a> {
    /// Returns the chunk as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'a str {
        match self {
            Self::Unencoded(s) | Self::PctEncoded(s) => s,
        }
    }
}

/// Returns an iterator used to percent-encode the given string with a table.
pub fn encode(s: &str, table: Table) -> Encode<'_> {
    Encode {
        table,
        source: s,
        to_enc: &[],
    }
}

impl<'a> Iterator for Encode<'a> {
    type Item = EncodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let [x, rem @ ..] = self.to_enc {
            self.to_enc = rem;
            return Some(EncodedChunk::PctEncoded(encode_byte(*x)));
        }

        if self.source.is_empty() {
            return None;
        }

        let mut iter = self.source.char_indices();

        let first_unallowed_i = iter
            .find_map(|(i, ch)| (!self.table.allows(ch)).then_some(i))
            .unwrap_or(self.source.len());

        let next_allowed_i = iter
            .find_map(|(i, ch)| self.table.allows(ch).then_some(i))
            .unwrap_or(self.source.len());

        if first_unallowed_i == 0 {
            let (unallowed, rem) = self.source.split_at(next_allowed_i);
            self.source = rem;

            let (x, rem) = unallowed.as_bytes().split_first()?;
            self.to_enc = rem;

            Some(EncodedChunk::PctEncoded(encode_byte(*x)))
        } else {
            let allowed = &self.source[..first_unallowed_i];
            self.to_enc = &self.source.as_bytes()[first_unallowed_i..next_allowed_i];
            self.source = &self.source[next_allowed_i..];

            Some(EncodedChunk::Unencoded(allowed))
        }
    }
}

impl FusedIterator for Encode<'_> {}

/// Percent-encodes the given string with a table.
///
/// This function allocates only when some character needs encoding.
pub fn encode_to_cow(s: &str, table: Table) -> Cow<'_, str> {
    let mut iter = encode(s, table);
    match iter.next() {
        None => Cow::Borrowed(""),
        Some(EncodedChunk::Unencoded(first)) if first.len() == s.len() => Cow::Borrowed(first),
        Some(first) => {
            let mut buf = String::with_capacity(s.len() + s.len() / 2);
            buf.push_str(first.as_str());
            iter.for_each(|chunk| buf.push_str(chunk.as_str()));
            Cow::Owned(buf)
        }
    }
}

/// Percent-encodes everything but `ALPHA / DIGIT / "-_.!~*'()"`,
/// as `encodeURIComponent` does in ECMAScript.
///
/// This is the default escaper for query parameters.
///
/// # Examples
///
/// ```
/// use lenient_uri::pct_enc::encode_uri_component;
///
/// assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
/// assert_eq!(encode_uri_component("张三"), "%E5%BC%A0%E4%B8%89");
/// ```
pub fn encode_uri_component(s: &str) -> Cow<'_, str> {
    encode_to_cow(s, table::URI_COMPONENT)
}

/// Strips the characters forbidden in a URL fragment (NUL, TAB, CR and LF)
/// without percent-encoding anything else.
///
/// This is the default escaper for fragment parameters.
///
/// # Examples
///
/// ```
/// use lenient_uri::pct_enc::encode_uri_fragment;
///
/// assert_eq!(encode_uri_fragment("a b\r\nc"), "a bc");
/// ```
pub fn encode_uri_fragment(s: &str) -> Cow<'_, str> {
    if s.bytes().any(|x| table::FRAGMENT_FORBIDDEN.allows_ascii(x)) {
        Cow::Owned(
            s.chars()
                .filter(|&ch| !table::FRAGMENT_FORBIDDEN.allows(ch))
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

/// Decodes every `%XX` sequence to the code point of the same byte value.
///
/// This is **not** a full URI percent-decoder: multi-byte UTF-8 sequences
/// are not reassembled. Use [`decode`] for that.
///
/// # Examples
///
/// ```
/// use lenient_uri::pct_enc::percent_decode;
///
/// assert_eq!(percent_decode("/a%20b/%7e"), "/a b/~");
/// assert_eq!(percent_decode("%C3%A9"), "\u{c3}\u{a9}");
/// ```
pub fn percent_decode(s: &str) -> Cow<'_, str> {
    decode(s).to_string_by_byte()
}

/// Decodes a query parameter name or value, replacing invalid UTF-8.
pub(crate) fn decode_component(s: &str) -> String {
    decode(s).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_chunks() {
        let chunks: Vec<_> = decode("a%20b%2%zz%41").collect();
        assert_eq!(
            chunks,
            [
                DecodedChunk::Unencoded("a"),
                DecodedChunk::PctDecoded(b' '),
                DecodedChunk::Unencoded("b%2%zz"),
                DecodedChunk::PctDecoded(b'A'),
            ]
        );
    }

    #[test]
    fn decode_borrows_when_possible() {
        assert!(matches!(decode("abc%").to_bytes(), Cow::Borrowed(b"abc%")));
        assert!(matches!(decode("").to_string(), Ok(Cow::Borrowed(""))));
        assert!(matches!(decode("a%41").to_string(), Ok(Cow::Owned(_))));
    }

    #[test]
    fn decode_invalid_utf8() {
        assert_eq!(decode("%FF%41").to_string().unwrap_err(), [0xff, b'A']);
        assert_eq!(decode("x%FF").to_string_lossy(), "x\u{fffd}");
    }

    #[test]
    fn encode_chunks() {
        let chunks: Vec<_> = encode("a é", table::URI_COMPONENT).collect();
        assert_eq!(
            chunks,
            [
                EncodedChunk::Unencoded("a"),
                EncodedChunk::PctEncoded("%20"),
                EncodedChunk::PctEncoded("%C3"),
                EncodedChunk::PctEncoded("%A9"),
            ]
        );
        assert!(matches!(encode_uri_component("abc"), Cow::Borrowed("abc")));
        assert!(matches!(encode_uri_component(""), Cow::Borrowed("")));
    }
}
