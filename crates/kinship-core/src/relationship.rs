//! Relationship queries over a finished [`Registry`]
//!
//! All queries resolve family links by id at call time and fail with an
//! unknown-reference error when a link points nowhere. Results are id lists in
//! traversal order; repeated ids are kept.

use crate::error::{Error, Result};
use crate::limits::validate_cousin_degree;
use crate::registry::Registry;
use std::collections::HashSet;

/// Read-only query engine borrowing a parsed registry
#[derive(Debug, Clone, Copy)]
pub struct RelationshipEngine<'a> {
    pub(crate) registry: &'a Registry,
}

/// Ids on the current recursion path; seeing one twice means the family graph loops
#[derive(Debug, Default)]
pub(crate) struct PathGuard<'a> {
    path: HashSet<&'a str>,
}

impl<'a> PathGuard<'a> {
    pub(crate) fn enter(&mut self, id: &'a str) -> Result<()> {
        if self.path.insert(id) {
            Ok(())
        } else {
            Err(Error::Cycle(id.to_string()))
        }
    }

    pub(crate) fn leave(&mut self, id: &str) {
        self.path.remove(id);
    }
}

impl<'a> RelationshipEngine<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// `person_id` followed by every descendant, depth first in source order
    pub fn descendants(&self, person_id: &str) -> Result<Vec<String>> {
        tracing::debug!("Collecting descendants of {}", person_id);
        let mut found = Vec::new();
        let mut guard = PathGuard::default();
        self.collect_descendants(person_id, &mut guard, &mut found)?;
        Ok(found)
    }

    fn collect_descendants(
        &self,
        person_id: &str,
        guard: &mut PathGuard<'a>,
        found: &mut Vec<String>,
    ) -> Result<()> {
        let person = self.registry.person(person_id)?;
        guard.enter(&person.id)?;
        found.push(person.id.clone());

        for family in self.registry.spouse_families_of(&person.id)? {
            for child in &family.children {
                self.collect_descendants(child, guard, found)?;
            }
        }

        guard.leave(&person.id);
        Ok(())
    }

    /// True if `candidate_id` is `person_id` or one of its descendants
    pub fn is_descendant(&self, person_id: &str, candidate_id: &str) -> Result<bool> {
        self.registry.person(person_id)?;
        if person_id == candidate_id {
            return Ok(true);
        }
        Ok(self
            .descendants(person_id)?
            .iter()
            .any(|id| id == candidate_id))
    }

    /// Children of the siblings of each parent, both parent sides concatenated
    pub fn first_cousins(&self, person_id: &str) -> Result<Vec<String>> {
        let mut guard = PathGuard::default();
        self.collect_nth_cousins(person_id, 1, &mut guard)
    }

    /// Nth cousins; degrees 0 and 1 both mean first cousins
    pub fn nth_cousins(&self, person_id: &str, degree: u32) -> Result<Vec<String>> {
        validate_cousin_degree(degree)?;
        tracing::debug!("Collecting degree {} cousins of {}", degree, person_id);
        let mut guard = PathGuard::default();
        self.collect_nth_cousins(person_id, degree, &mut guard)
    }

    /// Climbs the parent chain `degree` steps; a person met twice on that chain is a cycle
    fn collect_nth_cousins(
        &self,
        person_id: &str,
        degree: u32,
        guard: &mut PathGuard<'a>,
    ) -> Result<Vec<String>> {
        let person = self.registry.person(person_id)?;
        guard.enter(&person.id)?;

        let mut cousins = Vec::new();
        if let Some(family) = self.registry.child_family_of(&person.id)? {
            for parent in family.spouses() {
                if degree <= 1 {
                    guard.enter(&parent.person_id)?;
                    self.extend_with_parent_siblings_children(&parent.person_id, &mut cousins)?;
                    guard.leave(&parent.person_id);
                } else {
                    for parent_cousin in
                        self.collect_nth_cousins(&parent.person_id, degree - 1, guard)?
                    {
                        self.extend_with_children(&parent_cousin, &mut cousins)?;
                    }
                }
            }
        }

        guard.leave(&person.id);
        Ok(cousins)
    }

    /// Append the children of every sibling of `parent_id`
    fn extend_with_parent_siblings_children(
        &self,
        parent_id: &str,
        out: &mut Vec<String>,
    ) -> Result<()> {
        let Some(grandparents) = self.registry.child_family_of(parent_id)? else {
            return Ok(());
        };
        for sibling in grandparents.children.iter().filter(|child| *child != parent_id) {
            self.extend_with_children(sibling, out)?;
        }
        Ok(())
    }

    /// Append the children of every family where `person_id` is a spouse
    fn extend_with_children(&self, person_id: &str, out: &mut Vec<String>) -> Result<()> {
        for family in self.registry.spouse_families_of(person_id)? {
            out.extend(family.children.iter().cloned());
        }
        Ok(())
    }
}
