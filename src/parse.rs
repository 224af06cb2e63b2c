use crate::{
    imp::{AuthMeta, Meta},
    pct_enc::Table,
};
use core::{
    num::NonZeroUsize,
    ops::{Deref, DerefMut},
};

/// Bytes ending a scheme: `":" / "/" / "?" / "#"`.
const SCHEME_END: Table = Table::new(b":/?#");
/// Bytes ending an authority: `"/" / "?" / "#"`.
const AUTHORITY_END: Table = Table::new(b"/?#");
/// Bytes ending a path: `"?" / "#"`.
const PATH_END: Table = Table::new(b"?#");
/// Bytes ending a query: `"#"`.
const QUERY_END: Table = Table::new(b"#");

/// Parses a string into five ordered, optional parts:
///
/// ```text
/// [ scheme ":" ] [ "//" authority ] path [ "?" query ] [ "#" fragment ]
/// ```
///
/// Every input matches, so this never fails. Nothing but the delimiters
/// is inspected, which lets templates like `{scheme}://example.com` through.
pub(crate) fn parse(bytes: &[u8]) -> Meta {
    let mut parser = Parser {
        reader: Reader::new(bytes),
        out: Meta::default(),
    };
    parser.parse_from_scheme();
    parser.out
}

/// URI parser.
///
/// # Invariants
///
/// `pos <= len`, `pos` is non-decreasing and on the boundary of a UTF-8 code point.
///
/// # Guarantees
///
/// All output indexes are within bounds, correctly ordered and on the
/// boundary of a UTF-8 code point, given that `bytes` is valid UTF-8.
/// Since all delimiters are ASCII, the last guarantee holds trivially.
struct Parser<'a> {
    reader: Reader<'a>,
    out: Meta,
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Deref for Parser<'a> {
    type Target = Reader<'a>;

    fn deref(&self) -> &Self::Target {
        &self.reader
    }
}

impl DerefMut for Parser<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.reader
    }
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.len()
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.bytes.get(self.pos + i).copied()
    }

    // Any call to this method must keep the invariants.
    fn skip(&mut self, n: usize) {
        // INVARIANT: `pos` is non-decreasing.
        self.pos += n;
        debug_assert!(self.pos <= self.len());
    }

    /// Reads up to (excluding) the first byte allowed by `stop`, or to the end.
    ///
    /// Returns the number of bytes read.
    fn read_until(&mut self, stop: Table) -> usize {
        let start = self.pos;
        let n = self.bytes[start..]
            .iter()
            .position(|&x| stop.allows_ascii(x))
            .unwrap_or(self.len() - start);
        // INVARIANT: `stop` only allows ASCII, so we land on a code point boundary.
        self.skip(n);
        n
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.bytes[self.pos..].starts_with(s.as_bytes()) {
            // INVARIANT: The remaining bytes start with `s` so it's fine to skip `s.len()`.
            self.skip(s.len());
            true
        } else {
            false
        }
    }
}

impl Parser<'_> {
    fn parse_from_scheme(&mut self) {
        let n = self.read_until(SCHEME_END);

        if n > 0 && self.peek(0) == Some(b':') {
            self.out.scheme_end = NonZeroUsize::new(self.pos);
            // INVARIANT: Skipping ":" is fine.
            self.skip(1);
        } else {
            // Not a scheme. Start over and read it as part of the path.
            // INVARIANT: Nothing is output yet.
            self.pos = 0;
        }

        if self.read_str("//") {
            self.parse_authority();
        }
        self.parse_from_path();
    }

    fn parse_authority(&mut self) {
        let start = self.pos;
        self.read_until(AUTHORITY_END);
        let end = self.pos;

        let auth = &self.bytes[start..end];

        // Userinfo ends at the last "@".
        let host_start = match auth.iter().rposition(|&x| x == b'@') {
            Some(i) => start + i + 1,
            None => start,
        };

        // Port starts after the last ":" following the host, unless
        // the colon is part of a bracketed IP literal.
        let host = &self.bytes[host_start..end];
        let literal_end = host.iter().rposition(|&x| x == b']').map_or(0, |i| i + 1);
        let host_end = match host[literal_end..].iter().rposition(|&x| x == b':') {
            Some(i) => host_start + literal_end + i,
            None => end,
        };

        self.out.auth_meta = Some(AuthMeta {
            host_bounds: (host_start, host_end),
        });
    }

    fn parse_from_path(&mut self) {
        let path_start = self.pos;
        self.read_until(PATH_END);
        self.out.path_bounds = (path_start, self.pos);

        if self.read_str("?") {
            self.read_until(QUERY_END);
            self.out.query_end = NonZeroUsize::new(self.pos);
        }

        // Whatever is left starts with "#" and is taken as the fragment.
        debug_assert!(!self.has_remaining() || self.peek(0) == Some(b'#'));
    }
}
