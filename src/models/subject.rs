//! Subject profiles
//!
//! The tracker follows exactly two subjects. Both slots exist from the start
//! with placeholder values and are only ever updated, never removed.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::types::{Sex, SubjectId};

/// Profile of one tracked infant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Display name
    pub name: String,
    /// Selects the reference table
    #[serde(default)]
    pub sex: Sex,
    /// Birth date; percentiles are unavailable until it is set
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Expected due date, used for corrected age
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Subject {
    /// Create a subject with only a name and sex
    #[must_use]
    pub fn new(name: impl Into<String>, sex: Sex) -> Self {
        Self {
            name: name.into(),
            sex,
            birth_date: None,
            due_date: None,
        }
    }

    /// Set the birth date
    #[must_use]
    pub const fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Set the expected due date
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Placeholder profile created when no data file exists yet
    #[must_use]
    pub fn placeholder(id: SubjectId) -> Self {
        match id {
            SubjectId::A => Self::new("Twin A", Sex::Male),
            SubjectId::B => Self::new("Twin B", Sex::Female),
        }
    }

    /// Apply a partial update
    pub fn apply(&mut self, patch: SubjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(sex) = patch.sex {
            self.sex = sex;
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
    }
}

/// Partial update for a subject profile
///
/// For the two dates the outer `Option` says whether the field was sent at
/// all, the inner one whether it is being set or cleared.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPatch {
    /// New display name
    #[serde(default)]
    pub name: Option<String>,
    /// New sex
    #[serde(default)]
    pub sex: Option<Sex>,
    /// New birth date, or `Some(None)` to clear it
    #[serde(default, deserialize_with = "present_or_null")]
    pub birth_date: Option<Option<NaiveDate>>,
    /// New due date, or `Some(None)` to clear it
    #[serde(default, deserialize_with = "present_or_null")]
    pub due_date: Option<Option<NaiveDate>>,
}

fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The two subject slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subjects {
    /// Slot "a"
    pub a: Subject,
    /// Slot "b"
    pub b: Subject,
}

impl Subjects {
    /// Create from two profiles
    #[must_use]
    pub const fn new(a: Subject, b: Subject) -> Self {
        Self { a, b }
    }

    /// Profile in the given slot
    #[must_use]
    pub const fn get(&self, id: SubjectId) -> &Subject {
        match id {
            SubjectId::A => &self.a,
            SubjectId::B => &self.b,
        }
    }

    /// Mutable profile in the given slot
    pub fn get_mut(&mut self, id: SubjectId) -> &mut Subject {
        match id {
            SubjectId::A => &mut self.a,
            SubjectId::B => &mut self.b,
        }
    }

    /// Iterate both slots in fixed order
    pub fn iter(&self) -> impl Iterator<Item = (SubjectId, &Subject)> {
        SubjectId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

impl Default for Subjects {
    fn default() -> Self {
        Self::new(
            Subject::placeholder(SubjectId::A),
            Subject::placeholder(SubjectId::B),
        )
    }
}
