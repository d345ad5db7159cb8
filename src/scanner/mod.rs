// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

pub mod buffer;
pub use self::buffer::{Cursor, SliceCursor};

pub mod symbols;
pub use self::symbols::{TokenKind, ValidSymbols};

pub mod scan;
pub use self::scan::{Scan, Scanner, MAX_MACRO_LEN};

mod tools;
