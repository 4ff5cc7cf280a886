use hashbrown::HashMap as FastHashMap;
use regex::Regex;
use smallvec::SmallVec;

use super::{CompileError, CompileResult};

/// Maps capture group names to the ordinal the engine assigns them.
///
/// Ordinals are handed out in the order groups are opened, starting at 1;
/// ordinal 0 is the whole match. Unnamed capturing groups take an ordinal but
/// have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    entries: SmallVec<[(Box<str>, usize); 8]>,
    index: FastHashMap<Box<str>, usize>,
    group_count: usize,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Named groups in the order they appear in the pattern.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(name, ordinal)| (name.as_ref(), *ordinal))
    }

    /// Number of named groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of capturing groups, named or not, excluding the whole match.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub(crate) fn open_group(&mut self, name: Option<&str>) -> CompileResult<usize> {
        self.group_count += 1;
        let ordinal = self.group_count;

        if let Some(name) = name {
            if let Some(&first) = self.index.get(name) {
                return Err(CompileError::DuplicateGroupName {
                    name: name.to_string(),
                    first,
                    second: ordinal,
                });
            }
            let boxed: Box<str> = name.into();
            self.entries.push((boxed.clone(), ordinal));
            self.index.insert(boxed, ordinal);
        }

        Ok(ordinal)
    }

    /// Checks the registry against the engine's own numbering.
    pub(crate) fn verify(&self, regex: &Regex) -> Result<(), String> {
        if regex.captures_len() != self.group_count + 1 {
            return Err(format!(
                "engine reports {} groups, registry counted {}",
                regex.captures_len() - 1,
                self.group_count
            ));
        }

        let mut engine_named = 0usize;
        for (ordinal, name) in regex.capture_names().enumerate() {
            let Some(name) = name else {
                continue;
            };
            engine_named += 1;
            match self.ordinal_of(name) {
                Some(found) if found == ordinal => {}
                Some(found) => {
                    return Err(format!(
                        "group '{name}' is ordinal {ordinal} in the engine but {found} in the registry"
                    ));
                }
                None => return Err(format!("group '{name}' is missing from the registry")),
            }
        }

        if engine_named != self.entries.len() {
            return Err(format!(
                "engine reports {engine_named} named groups, registry holds {}",
                self.entries.len()
            ));
        }

        Ok(())
    }
}
