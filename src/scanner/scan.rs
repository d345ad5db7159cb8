// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::buffer::Cursor;
use super::symbols::{TokenKind, ValidSymbols};
use super::tools;
use crate::registry::MacroRegistry;

/// Capacity of the per-scan identifier buffer. An identifier which grows
/// past this length cannot be a macro name: the scan declines instead of
/// writing further.
pub const MAX_MACRO_LEN: usize = 1024;

/// Outcome of one scanner invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scan {
    /// Nothing recognized; the host re-lexes from the invocation's start
    /// position with its own tables.
    Decline,
    /// A token was recognized; `end` is the boundary fixed with `mark_end`,
    /// excluding trailing whitespace and any disambiguating lookahead.
    Accept { kind: TokenKind, end: usize },
}

/// Scanner invoked by the host parser when its tables cannot tell whether
/// an identifier is a macro annotation, a macro call or a plain identifier.
///
/// The scanner holds no state between invocations: each call is a pure
/// function of the cursor, the valid-symbol set and the registry, so the
/// host may invoke it from several speculative parse branches with distinct
/// cursors.
#[derive(Debug)]
pub struct Scanner<R: MacroRegistry> {
    registry: R,
}

impl<R: MacroRegistry> Scanner<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Decide whether the upcoming text is a macro annotation or a macro
    /// call, fixing the token boundary at the end of the identifier.
    ///
    /// The identifier itself is the whole token: trailing whitespace and the
    /// character inspected to disambiguate (`(`, a literal start, `{`, ...)
    /// are never part of the accepted span.
    pub fn scan<C: Cursor>(&self, cursor: &mut C, valid: ValidSymbols) -> Scan {
        while let Some(c) = cursor.lookahead() {
            if !tools::is_whitespace(c) {
                break;
            }
            cursor.advance(true);
        }

        if !valid.wants_macro() {
            return Scan::Decline;
        }

        let c = match cursor.lookahead() {
            Some(c) if tools::is_ident_start(c) => c,
            _ => return Scan::Decline,
        };

        let mut identifier = Vec::with_capacity(64);
        identifier.push(c);
        cursor.advance(false);
        while let Some(c) = cursor.lookahead() {
            if !tools::is_ident_part(c) {
                break;
            }
            if identifier.len() == MAX_MACRO_LEN {
                return Scan::Decline;
            }
            identifier.push(c);
            cursor.advance(false);
        }

        // the identifier bytes are ASCII by construction
        let name = unsafe { std::str::from_utf8_unchecked(&identifier) };
        if !self.registry.contains(name) {
            // the host's own identifier rule will consume this text
            return Scan::Decline;
        }

        cursor.mark_end();
        let end = cursor.pos();

        // Some parse states only admit the bare annotation form: accept
        // without inspecting anything past the boundary.
        if valid.contains(ValidSymbols::SPECIAL) {
            return Scan::Accept {
                kind: TokenKind::Annotation,
                end,
            };
        }

        // Pure lookahead from here on: the boundary is already fixed.
        while let Some(c) = cursor.lookahead() {
            if !tools::is_whitespace(c) {
                break;
            }
            cursor.advance(false);
        }

        match cursor.lookahead() {
            Some(b'(') if valid.contains(ValidSymbols::CALL) => Scan::Accept {
                kind: TokenKind::Call,
                end,
            },
            // A literal, an identifier or a brace right after the name is
            // the annotation idiom (e.g. LOG_MARKER "message", GUARD { ... }).
            Some(c)
                if valid.contains(ValidSymbols::ANNOTATION)
                    && (tools::is_ident_part(c) || c == b'"' || c == b'\'' || c == b'{') =>
            {
                Scan::Accept {
                    kind: TokenKind::Annotation,
                    end,
                }
            }
            _ => Scan::Decline,
        }
    }

    /// The scanner is stateless, so a checkpoint is always empty.
    pub fn serialize(&self) -> Vec<u8> {
        Vec::new()
    }

    /// Restoring a checkpoint is a no-op.
    pub fn deserialize(&mut self, _data: &[u8]) {}
}
