//! Character tables used by the escapers and the sanitizer.
//!
//! A [`Table`] is a bitset over ASCII. Whether non-ASCII characters pass
//! is decided by the caller, since every escaper in this crate treats them
//! uniformly.

/// A table specifying the ASCII bytes left unencoded by an escaper.
#[derive(Clone, Copy, Debug)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that allows the given ASCII bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "cannot allow non-ASCII byte");
            table |= 1u128 << *cur;
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Creates a table that allows every byte in `start..=end`.
    ///
    /// # Panics
    ///
    /// Panics if `end` is not ASCII.
    #[must_use]
    pub const fn range(start: u8, end: u8) -> Self {
        assert!(end.is_ascii(), "cannot allow non-ASCII byte");
        let mut table = 0;
        let mut i = start;
        while i <= end {
            table |= 1u128 << i;
            i += 1;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Subtracts from this table.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the given byte is allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows_ascii(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Checks whether the given character is allowed by the table.
    ///
    /// Non-ASCII characters are never allowed.
    #[inline]
    #[must_use]
    pub const fn allows(self, ch: char) -> bool {
        ch.is_ascii() && self.allows_ascii(ch as u8)
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// Printable ASCII, `%x20-7E`.
pub const PRINTABLE: Table = Table::range(0x20, 0x7e);

/// Characters left alone by `encodeURIComponent` in ECMAScript:
/// `ALPHA / DIGIT / "-" / "_" / "." / "!" / "~" / "*" / "'" / "(" / ")"`.
pub const URI_COMPONENT: Table = ALPHA.or(DIGIT).or(new(b"-_.!~*'()"));

/// Printable ASCII minus the characters an IRI may carry literally
/// but a URI may not: `<>"{}|\^`, backtick and space.
pub const URI_FROM_IRI: Table = PRINTABLE.sub(new(b"<>\"{}|\\^` "));

/// Control characters stripped from fragments: NUL, TAB, CR and LF.
pub const FRAGMENT_FORBIDDEN: Table = new(b"\0\t\r\n");

/// ASCII part of the allow-list kept by
/// [`remove_invalid_characters`](crate::sanitize::remove_invalid_characters):
///
/// `" " / "#" / "<" / ">" / "?" / "`" / "!" / "$" / "&" / "'" / "(" / ")"
/// / "*" / "+" / "," / "-" / "." / "/" / ":" / ";" / "=" / "@" / "_" / "~"
/// / DIGIT / ALPHA`
pub const URL_SAFE: Table = ALPHA
    .or(DIGIT)
    .or(new(b" #<>?`!$&'()*+,-./:;=@_~"));
