//! Person (individual record) types

use crate::event::Event;
use serde::{Deserialize, Serialize};

/// An individual parsed from an `INDI` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Record id with delimiters stripped (e.g. `I1`)
    pub id: String,

    /// Given names
    #[serde(default)]
    pub given: String,

    /// Surname as written in the record
    #[serde(default)]
    pub surname: String,

    /// Name suffix (e.g. `Jr.`)
    #[serde(default)]
    pub suffix: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<Event>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub death: Option<Event>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub marriage: Option<Event>,

    /// Families in which this person is a spouse, in source order
    #[serde(default)]
    pub spouse_families: Vec<String>,

    /// Family in which this person is a child
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_family: Option<String>,
}

impl Person {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            given: String::new(),
            surname: String::new(),
            suffix: String::new(),
            birth: None,
            death: None,
            marriage: None,
            spouse_families: Vec::new(),
            child_family: None,
        }
    }

    pub fn with_name(
        mut self,
        given: impl Into<String>,
        surname: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        self.set_name(given, surname, suffix);
        self
    }

    pub fn set_name(
        &mut self,
        given: impl Into<String>,
        surname: impl Into<String>,
        suffix: impl Into<String>,
    ) {
        self.given = given.into();
        self.surname = surname.into();
        self.suffix = suffix.into();
    }

    /// Record another family where this person is a spouse (remarriage keeps all)
    pub fn add_spouse_family(&mut self, family_id: impl Into<String>) {
        self.spouse_families.push(family_id.into());
    }

    /// Record the family where this person is a child; a later call replaces it
    pub fn set_child_family(&mut self, family_id: impl Into<String>) {
        self.child_family = Some(family_id.into());
    }

    /// Given names, uppercased surname and suffix separated by single spaces
    pub fn display_name(&self) -> String {
        format!(
            "{} {} {}",
            self.given,
            self.surname.to_uppercase(),
            self.suffix
        )
    }

    /// Marriage, birth and death events in chart notation
    pub fn event_summary(&self) -> String {
        let mut summary = String::new();
        if let Some(event) = &self.marriage {
            summary.push_str(" m ");
            summary.push_str(&event.summary());
        }
        if let Some(event) = &self.birth {
            summary.push_str(" n: ");
            summary.push_str(&event.summary());
        }
        if let Some(event) = &self.death {
            summary.push_str(" d: ");
            summary.push_str(&event.summary());
        }
        summary
    }

    /// Name followed by event summary, the line shape used by every chart
    pub fn chart_label(&self) -> String {
        self.display_name() + &self.event_summary()
    }

    /// Family links in `| asChild: F1 | asSpouse: F2,F3` form
    pub fn tree_info(&self) -> String {
        let mut info = String::new();
        if let Some(family) = &self.child_family {
            info.push_str(" | asChild: ");
            info.push_str(family);
        }
        if !self.spouse_families.is_empty() {
            info.push_str(" | asSpouse: ");
            info.push_str(&self.spouse_families.join(","));
        }
        info
    }

    /// True when no child-of family was recorded
    pub fn is_founder(&self) -> bool {
        self.child_family.is_none()
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.display_name(), self.tree_info())
    }
}
