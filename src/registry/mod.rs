// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

pub mod set;
pub use self::set::{MacroSet, RegistryError};

/// Oracle answering whether an identifier is a registered macro name.
///
/// Implementations must be pure and deterministic: exact, case-sensitive
/// membership with no side effects. The embedding front end decides how the
/// registry is populated; the scanner only consults it.
pub trait MacroRegistry {
    /// Check if `name` is a registered macro name.
    fn contains(&self, name: &str) -> bool;
}

/// A registry with no names: the scanner always declines.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyRegistry;

impl MacroRegistry for EmptyRegistry {
    fn contains(&self, _name: &str) -> bool {
        false
    }
}

/// Any predicate over the name works as a registry.
#[derive(Clone, Copy, Debug)]
pub struct FnRegistry<F>(pub F);

impl<F> MacroRegistry for FnRegistry<F>
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, name: &str) -> bool {
        (self.0)(name)
    }
}

impl<'a, R: MacroRegistry + ?Sized> MacroRegistry for &'a R {
    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_empty_registry() {
        assert!(!EmptyRegistry.contains("LOG_INFO"));
        assert!(!EmptyRegistry.contains(""));
    }

    #[test]
    fn test_closure_registry() {
        let registry = FnRegistry(|name: &str| name == "LOG_INFO");
        assert!(registry.contains("LOG_INFO"));
        assert!(!registry.contains("log_info"));
        assert!(!registry.contains("LOG_INFO2"));
    }

    #[test]
    fn test_registry_by_reference() {
        let registry = FnRegistry(|name: &str| name == "LOG_INFO");
        let by_ref: &dyn MacroRegistry = &registry;
        assert!(by_ref.contains("LOG_INFO"));
        assert!((&registry).contains("LOG_INFO"));
    }
}
