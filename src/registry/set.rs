// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hashbrown::HashSet;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::MacroRegistry;

lazy_static! {
    // Macro names the front end can always rely on, on top of whatever the
    // user registers. Mostly the Mozilla annotation/assertion family the
    // grammar was designed around.
    static ref PREDEFINED_MACROS: HashSet<&'static str> = {
        let mut set = HashSet::with_capacity(32);
        set.insert("MOZ_ALWAYS_INLINE");
        set.insert("MOZ_ALWAYS_TRUE");
        set.insert("MOZ_ASSERT");
        set.insert("MOZ_ASSERT_IF");
        set.insert("MOZ_CRASH");
        set.insert("MOZ_DIAGNOSTIC_ASSERT");
        set.insert("MOZ_FALLTHROUGH");
        set.insert("MOZ_GUARD_OBJECT_NOTIFIER_PARAM");
        set.insert("MOZ_LIKELY");
        set.insert("MOZ_MUST_USE");
        set.insert("MOZ_NEVER_INLINE");
        set.insert("MOZ_RAII");
        set.insert("MOZ_RELEASE_ASSERT");
        set.insert("MOZ_STACK_CLASS");
        set.insert("MOZ_UNLIKELY");
        set.insert("NS_ASSERTION");
        set.insert("NS_ENSURE_SUCCESS");
        set.insert("NS_ENSURE_TRUE");
        set.insert("NS_IMETHOD");
        set.insert("NS_IMETHODIMP");
        set.insert("NS_WARNING");
        set
    };
}

#[derive(Debug)]
pub enum RegistryError {
    Io(std::io::Error),
    Json(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Io(e) => write!(f, "can't read macro file: {}", e),
            RegistryError::Json(e) => write!(f, "invalid macro file: {}", e),
        }
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(e: std::io::Error) -> Self {
        RegistryError::Io(e)
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Json(e.to_string())
    }
}

/// JSON shape of a macro file: { "macros": ["NAME", ...] }
#[derive(Debug, Deserialize)]
struct MacroFile {
    macros: Vec<String>,
}

/// Macro names supplied by the embedding front end, merged with the
/// predefined table for lookups.
#[derive(Clone, Debug, Default)]
pub struct MacroSet {
    names: HashSet<String>,
}

impl MacroSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names(names: &[&str]) -> Self {
        let mut set = Self::new();
        for name in names {
            set.insert(name);
        }
        set
    }

    /// Load names from a JSON file with a top-level `macros` array.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let mut file = File::open(path.as_ref())?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let parsed: MacroFile = serde_json::from_slice(&data)?;
        let mut set = Self::new();
        for name in parsed.macros {
            set.names.insert(name);
        }
        Ok(set)
    }

    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.names.insert(name.into());
        }
    }

    /// Number of user-registered names (the predefined table not included).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl MacroRegistry for MacroSet {
    fn contains(&self, name: &str) -> bool {
        self.names.contains(name) || PREDEFINED_MACROS.contains(name)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::io::Write;
    use tempdir::TempDir;

    #[test]
    fn test_user_names() {
        let mut set = MacroSet::new();
        assert!(set.is_empty());
        assert!(!set.contains("LOG_INFO"));

        set.insert("LOG_INFO");
        assert!(set.contains("LOG_INFO"));
        assert!(!set.contains("log_info"));
        assert!(!set.contains("LOG"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_predefined_names() {
        let set = MacroSet::new();
        assert!(set.contains("MOZ_ASSERT"));
        assert!(set.contains("NS_WARNING"));
        assert!(!set.contains("MOZ_NOT_A_MACRO"));
        // the predefined table doesn't count as user names
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_names_and_extend() {
        let mut set = MacroSet::from_names(&["A_MACRO", "B_MACRO"]);
        assert!(set.contains("A_MACRO"));
        assert!(set.contains("B_MACRO"));

        set.extend(vec!["C_MACRO".to_string()]);
        assert!(set.contains("C_MACRO"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_from_json_file() {
        let dir = TempDir::new("macro-scanner").unwrap();
        let path = dir.path().join("macros.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"{\"macros\": [\"LOG_INFO\", \"LOG_WARN\"]}")
            .unwrap();

        let set = MacroSet::from_json_file(&path).unwrap();
        assert!(set.contains("LOG_INFO"));
        assert!(set.contains("LOG_WARN"));
        assert!(!set.contains("LOG_ERROR"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_json_file_errors() {
        let dir = TempDir::new("macro-scanner").unwrap();

        match MacroSet::from_json_file(dir.path().join("missing.json")) {
            Err(RegistryError::Io(_)) => {}
            other => panic!("expected an io error, got {:?}", other),
        }

        let path = dir.path().join("bad.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"[\"not\", \"the\", \"shape\"]").unwrap();
        match MacroSet::from_json_file(&path) {
            Err(RegistryError::Json(_)) => {}
            other => panic!("expected a json error, got {:?}", other),
        }
    }
}
