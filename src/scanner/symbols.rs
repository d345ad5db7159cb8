// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use bitflags::bitflags;

/// Kind reported for an accepted span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    /// A bare macro name used in annotation/attribute position.
    Annotation,
    /// A macro name immediately followed by a parenthesized invocation.
    Call,
}

bitflags! {
    /// Token kinds the host parser accepts at the current parse state.
    /// Supplied fresh on every invocation and never mutated by the scanner.
    pub struct ValidSymbols: u8 {
        const ANNOTATION = 0b001;
        const CALL = 0b010;
        const SPECIAL = 0b100;
    }
}

impl ValidSymbols {
    /// The scanner only runs at all when one of these is expected.
    #[inline(always)]
    pub(crate) fn wants_macro(self) -> bool {
        self.intersects(ValidSymbols::ANNOTATION | ValidSymbols::CALL)
    }
}
