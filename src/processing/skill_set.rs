//! Set of extracted skill strings

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Distinct skill strings, iterated in lexicographic order.
///
/// Members keep the casing the extraction step produced; "Python" and
/// "python" are different members. Case only stops mattering when two sets
/// are compared by the match scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trimmed skill; blank strings are ignored
    pub fn insert(&mut self, skill: impl AsRef<str>) -> bool {
        let skill = skill.as_ref().trim();
        if skill.is_empty() {
            return false;
        }
        self.0.insert(skill.to_string())
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    /// JSON array form used when a set is stored; an empty set is stored as nothing
    pub fn to_json(&self) -> Result<Option<String>> {
        if self.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::to_string(&self.0)?))
    }

    pub fn from_json(stored: Option<&str>) -> Result<Self> {
        match stored {
            Some(json) if !json.trim().is_empty() => {
                let skills: Vec<String> = serde_json::from_str(json)?;
                Ok(skills.into_iter().collect())
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse a comma separated list such as a `--skills` argument
    pub fn from_delimited(list: &str) -> Self {
        list.split([',', ';']).collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for SkillSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for skill in iter {
            self.insert(skill);
        }
    }
}

impl IntoIterator for SkillSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_distinct() {
        let set: SkillSet = ["rust", "go", "rust", "  docker "].into_iter().collect();
        assert_eq!(set.to_vec(), vec!["docker", "go", "rust"]);
    }

    #[test]
    fn test_casing_is_preserved() {
        let set: SkillSet = ["Python", "python"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(!set.contains("PYTHON"));
    }

    #[test]
    fn test_json_round_trip() {
        let set: SkillSet = ["sql", "python", "team leadership"].into_iter().collect();
        let stored = set.to_json().unwrap();
        let restored = SkillSet::from_json(stored.as_deref()).unwrap();
        assert_eq!(restored, set);
    }

    #[test]
    fn test_empty_set_stored_as_none() {
        assert_eq!(SkillSet::new().to_json().unwrap(), None);
        assert!(SkillSet::from_json(None).unwrap().is_empty());
        assert!(SkillSet::from_json(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_from_json_ignores_order() {
        let set = SkillSet::from_json(Some(r#"["b", "a", "c"]"#)).unwrap();
        assert_eq!(set.to_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(SkillSet::from_json(Some("not json")).is_err());
    }

    #[test]
    fn test_from_delimited() {
        let set = SkillSet::from_delimited("Python, SQL;Leadership,,");
        assert_eq!(set.to_vec(), vec!["Leadership", "Python", "SQL"]);
    }
}
