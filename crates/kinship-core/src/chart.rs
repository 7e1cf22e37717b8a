//! Descendant and ancestor charts
//!
//! Charts are returned as text lines so any front end can print them; the
//! line shapes match the classic indented report format.

use crate::error::Result;
use crate::family::Family;
use crate::person::Person;
use crate::relationship::{PathGuard, RelationshipEngine};
use serde::{Deserialize, Serialize};

const CHILD_BRANCH: &str = "|--";
const SPOUSE_MARK: &str = "+";

/// One line of an ancestor chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorLine {
    /// One space per generation above the chart's subject
    pub marker: String,
    /// Generations above the chart's subject (the marker's length)
    pub generation: usize,
    pub person_id: String,
    /// Name and event summary
    pub label: String,
}

impl AncestorLine {
    fn new(marker: &str, person: &Person) -> Self {
        Self {
            marker: marker.to_string(),
            generation: marker.len(),
            person_id: person.id.clone(),
            label: person.chart_label(),
        }
    }
}

impl std::fmt::Display for AncestorLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.marker, self.generation, self.label)
    }
}

/// English ordinal suffix chosen by the last decimal digit only.
///
/// 11, 12 and 13 come out as "11st", "12nd" and "13rd".
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

impl<'a> RelationshipEngine<'a> {
    /// Indented chart of `person_id`, their spouses and all descendants
    pub fn descendant_chart(&self, person_id: &str) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        let mut guard = PathGuard::default();
        self.chart_person(person_id, "", &mut guard, &mut lines)?;
        Ok(lines)
    }

    fn chart_person(
        &self,
        person_id: &str,
        prefix: &str,
        guard: &mut PathGuard<'a>,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        let person = self.registry.person(person_id)?;
        guard.enter(&person.id)?;
        lines.push(format!("{}{}", prefix, person.chart_label()));

        for family in self.registry.spouse_families_of(&person.id)? {
            self.chart_family(family, &person.id, prefix, guard, lines)?;
        }

        guard.leave(&person.id);
        Ok(())
    }

    fn chart_family(
        &self,
        family: &'a Family,
        spouse_id: &str,
        prefix: &str,
        guard: &mut PathGuard<'a>,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        // swap the parent's trailing "--" for two spaces so the family hangs under it
        let prefix = if prefix.is_empty() {
            String::new()
        } else {
            format!("{}  ", &prefix[..prefix.len().saturating_sub(2)])
        };

        if let Some(other) = family.other_spouse(spouse_id) {
            let other = self.registry.person(&other.person_id)?;
            lines.push(format!("{}{}{}", prefix, SPOUSE_MARK, other.display_name()));
        }

        let child_prefix = format!("{}{}", prefix, CHILD_BRANCH);
        for child in &family.children {
            self.chart_person(child, &child_prefix, guard, lines)?;
        }
        Ok(())
    }

    /// Ancestors of `person_id`, each branch printed before the person it leads to
    pub fn ancestor_chart(&self, person_id: &str) -> Result<Vec<AncestorLine>> {
        tracing::debug!("Building ancestor chart for {}", person_id);
        let mut lines = Vec::new();
        let mut guard = PathGuard::default();
        self.chart_ancestors(person_id, "", &mut guard, &mut lines)?;
        Ok(lines)
    }

    fn chart_ancestors(
        &self,
        person_id: &str,
        marker: &str,
        guard: &mut PathGuard<'a>,
        lines: &mut Vec<AncestorLine>,
    ) -> Result<()> {
        let person = self.registry.person(person_id)?;
        guard.enter(&person.id)?;

        if let Some(family) = self.registry.child_family_of(&person.id)? {
            let parent_marker = format!("{} ", marker);
            for parent in family.spouses() {
                self.chart_ancestors(&parent.person_id, &parent_marker, guard, lines)?;
            }
        }
        lines.push(AncestorLine::new(marker, person));

        guard.leave(&person.id);
        Ok(())
    }
}
