//! Family (union) record types

use serde::{Deserialize, Serialize};

/// Role tag a spouse reference was recorded under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpouseRole {
    Husband,
    Wife,
}

impl SpouseRole {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "HUSB" => Some(Self::Husband),
            "WIFE" => Some(Self::Wife),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Husband => "Husband",
            Self::Wife => "Wife",
        }
    }
}

/// A role-tagged reference from a family to one of its spouses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpouseRef {
    pub person_id: String,
    pub role: SpouseRole,
}

impl SpouseRef {
    pub fn new(person_id: impl Into<String>, role: SpouseRole) -> Self {
        Self {
            person_id: person_id.into(),
            role,
        }
    }
}

/// A family unit parsed from a `FAM` record
///
/// Spouse slots are filled in arrival order, not by role: the first `HUSB` or
/// `WIFE` line seen takes slot 1 whichever tag it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse1: Option<SpouseRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse2: Option<SpouseRef>,

    /// Children in source order
    #[serde(default)]
    pub children: Vec<String>,
}

impl Family {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            spouse1: None,
            spouse2: None,
            children: Vec::new(),
        }
    }

    /// Fill the next spouse slot, returning the reference it displaced.
    ///
    /// Once both slots are taken, further spouses overwrite slot 2.
    pub fn add_spouse(&mut self, spouse: SpouseRef) -> Option<SpouseRef> {
        if self.spouse1.is_none() {
            self.spouse1 = Some(spouse);
            None
        } else {
            self.spouse2.replace(spouse)
        }
    }

    pub fn add_child(&mut self, person_id: impl Into<String>) {
        self.children.push(person_id.into());
    }

    /// Spouse references in slot order, skipping empty slots
    pub fn spouses(&self) -> impl Iterator<Item = &SpouseRef> {
        self.spouse1.iter().chain(self.spouse2.iter())
    }

    /// The spouse other than `person_id`; only defined when both slots are filled
    pub fn other_spouse(&self, person_id: &str) -> Option<&SpouseRef> {
        let (first, second) = (self.spouse1.as_ref()?, self.spouse2.as_ref()?);
        if first.person_id == person_id {
            Some(second)
        } else {
            Some(first)
        }
    }

    pub fn husband(&self) -> Option<&SpouseRef> {
        self.spouses().find(|s| s.role == SpouseRole::Husband)
    }

    pub fn wife(&self) -> Option<&SpouseRef> {
        self.spouses().find(|s| s.role == SpouseRole::Wife)
    }

    pub fn has_child(&self, person_id: &str) -> bool {
        self.children.iter().any(|c| c == person_id)
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for spouse in self.spouses() {
            write!(f, " {}: {}", spouse.role.label(), spouse.person_id)?;
        }
        if !self.children.is_empty() {
            write!(f, " Children: {}", self.children.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_fill_by_arrival() {
        let mut family = Family::new("F1");
        family.add_spouse(SpouseRef::new("I2", SpouseRole::Wife));
        family.add_spouse(SpouseRef::new("I1", SpouseRole::Husband));

        assert_eq!(family.spouse1.as_ref().unwrap().person_id, "I2");
        assert_eq!(family.spouse2.as_ref().unwrap().person_id, "I1");
        assert_eq!(family.husband().unwrap().person_id, "I1");
        assert_eq!(family.wife().unwrap().person_id, "I2");
    }

    #[test]
    fn test_third_spouse_overwrites_second() {
        let mut family = Family::new("F1");
        assert!(family.add_spouse(SpouseRef::new("I1", SpouseRole::Husband)).is_none());
        assert!(family.add_spouse(SpouseRef::new("I2", SpouseRole::Wife)).is_none());
        let displaced = family.add_spouse(SpouseRef::new("I3", SpouseRole::Wife));

        assert_eq!(displaced.unwrap().person_id, "I2");
        assert_eq!(family.spouse2.as_ref().unwrap().person_id, "I3");
        assert_eq!(family.spouses().count(), 2);
    }

    #[test]
    fn test_other_spouse() {
        let mut family = Family::new("F1");
        family.add_spouse(SpouseRef::new("I1", SpouseRole::Husband));
        assert!(family.other_spouse("I1").is_none());

        family.add_spouse(SpouseRef::new("I2", SpouseRole::Wife));
        assert_eq!(family.other_spouse("I1").unwrap().person_id, "I2");
        assert_eq!(family.other_spouse("I2").unwrap().person_id, "I1");
    }

    #[test]
    fn test_display() {
        let mut family = Family::new("F1");
        family.add_spouse(SpouseRef::new("I1", SpouseRole::Husband));
        family.add_spouse(SpouseRef::new("I2", SpouseRole::Wife));
        family.add_child("I3");
        family.add_child("I4");

        assert_eq!(family.to_string(), " Husband: I1 Wife: I2 Children: I3,I4");
        assert!(family.has_child("I4"));
        assert_eq!(Family::new("F2").to_string(), "");
    }
}
