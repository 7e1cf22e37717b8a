//! Registry of parsed persons and families

use crate::error::{Error, Result};
use crate::family::Family;
use crate::person::Person;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Id-keyed store of every person and family from one parse run.
///
/// Relationships are kept as ids and resolved on lookup, so a record may point
/// at a family declared further down the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    persons: BTreeMap<String, Person>,
    families: BTreeMap<String, Family>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person, returning the one previously registered under its id
    pub fn insert_person(&mut self, person: Person) -> Option<Person> {
        self.persons.insert(person.id.clone(), person)
    }

    /// Insert a family, returning the one previously registered under its id
    pub fn insert_family(&mut self, family: Family) -> Option<Family> {
        self.families.insert(family.id.clone(), family)
    }

    pub fn person(&self, id: &str) -> Result<&Person> {
        self.persons
            .get(id)
            .ok_or_else(|| Error::PersonNotFound(id.to_string()))
    }

    pub fn family(&self, id: &str) -> Result<&Family> {
        self.families
            .get(id)
            .ok_or_else(|| Error::FamilyNotFound(id.to_string()))
    }

    pub fn contains_person(&self, id: &str) -> bool {
        self.persons.contains_key(id)
    }

    /// Person ids in sorted order
    pub fn person_ids(&self) -> impl Iterator<Item = &str> {
        self.persons.keys().map(String::as_str)
    }

    /// Family ids in sorted order
    pub fn family_ids(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.families.is_empty()
    }

    /// The family `person_id` was born into, if one was recorded
    pub fn child_family_of(&self, person_id: &str) -> Result<Option<&Family>> {
        match &self.person(person_id)?.child_family {
            Some(family_id) => self.family(family_id).map(Some),
            None => Ok(None),
        }
    }

    /// Every family in which `person_id` is a spouse, in source order
    pub fn spouse_families_of(&self, person_id: &str) -> Result<Vec<&Family>> {
        self.person(person_id)?
            .spouse_families
            .iter()
            .map(|id| self.family(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{SpouseRef, SpouseRole};

    #[test]
    fn test_lookup() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        registry.insert_person(Person::new("I1").with_name("Ann", "Lee", ""));
        registry.insert_family(Family::new("F1"));

        assert!(!registry.is_empty());
        assert!(registry.contains_person("I1"));
        assert!(!registry.contains_person("F1"));
        assert_eq!(registry.person("I1").unwrap().given, "Ann");
        assert_eq!(registry.family("F1").unwrap().id, "F1");

        let missing = registry.person("I2").unwrap_err();
        assert!(missing.is_unknown_reference());
        assert!(matches!(
            registry.family("F2"),
            Err(Error::FamilyNotFound(id)) if id == "F2"
        ));
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }

    #[test]
    fn test_insert_replaces_duplicate() {
        let mut registry = Registry::new();
        assert!(registry.insert_person(Person::new("I1")).is_none());
        let previous = registry.insert_person(Person::new("I1").with_name("Bo", "Ng", ""));

        assert!(previous.is_some());
        assert_eq!(registry.person_count(), 1);
        assert_eq!(registry.person("I1").unwrap().given, "Bo");
    }

    #[test]
    fn test_ids_sorted() {
        let mut registry = Registry::new();
        for id in ["I3", "I1", "I2"] {
            registry.insert_person(Person::new(id));
        }
        let ids: Vec<&str> = registry.person_ids().collect();
        assert_eq!(ids, vec!["I1", "I2", "I3"]);
        assert_eq!(registry.family_ids().count(), 0);
    }

    #[test]
    fn test_resolve_links() {
        let mut registry = Registry::new();
        let mut child = Person::new("I3");
        child.set_child_family("F1");
        let mut parent = Person::new("I1");
        parent.add_spouse_family("F1");
        parent.add_spouse_family("F9");
        registry.insert_person(child);
        registry.insert_person(parent);
        registry.insert_person(Person::new("I2"));

        let mut family = Family::new("F1");
        family.add_spouse(SpouseRef::new("I1", SpouseRole::Husband));
        family.add_child("I3");
        registry.insert_family(family);

        assert_eq!(registry.child_family_of("I3").unwrap().unwrap().id, "F1");
        assert!(registry.child_family_of("I2").unwrap().is_none());
        assert!(matches!(
            registry.spouse_families_of("I1"),
            Err(Error::FamilyNotFound(id)) if id == "F9"
        ));
    }
}
