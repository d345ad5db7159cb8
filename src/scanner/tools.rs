// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#[inline(always)]
pub(crate) fn is_whitespace(c: u8) -> bool {
    c == b' ' || c == b'\t' || c == b'\n' || c == b'\r' || c == 0x0b || c == 0x0c
}

#[inline(always)]
pub(crate) fn is_ident_start(c: u8) -> bool {
    (b'a' <= c && c <= b'z') || (b'A' <= c && c <= b'Z') || c == b'_'
}

#[inline(always)]
pub(crate) fn is_ident_part(c: u8) -> bool {
    (b'a' <= c && c <= b'z')
        || (b'A' <= c && c <= b'Z')
        || (b'0' <= c && c <= b'9')
        || c == b'_'
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_ident_classes() {
        for c in b'a'..=b'z' {
            assert!(is_ident_start(c));
            assert!(is_ident_part(c));
        }
        for c in b'A'..=b'Z' {
            assert!(is_ident_start(c));
            assert!(is_ident_part(c));
        }
        for c in b'0'..=b'9' {
            assert!(!is_ident_start(c));
            assert!(is_ident_part(c));
        }
        assert!(is_ident_start(b'_'));
        assert!(is_ident_part(b'_'));

        for c in [b'(', b')', b'"', b'\'', b'{', b' ', b'.', 0x80].iter() {
            assert!(!is_ident_start(*c));
            assert!(!is_ident_part(*c));
        }
    }

    #[test]
    fn test_whitespace_class() {
        for c in [b' ', b'\t', b'\n', b'\r', 0x0b, 0x0c].iter() {
            assert!(is_whitespace(*c));
        }
        assert!(!is_whitespace(b'a'));
        assert!(!is_whitespace(b'('));
        assert!(!is_whitespace(0x00));
    }
}
