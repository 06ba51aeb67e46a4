//! Form fields and their values.
//!
//! `Field` is the registry key for everything field-related: validation,
//! error display and rendering all index by it rather than by name strings.

use std::fmt;
use std::str::FromStr;

use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A named input of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Age,
    Specialty,
    Bio,
    StudyLevel,
}

/// Which part of the form a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    /// Shown for every role.
    Common,
    /// Shown only while registering a student.
    StudentExtra,
    /// Shown only while registering a teacher.
    TeacherExtra,
}

impl FieldGroup {
    /// The extra group presented for a role.
    pub fn extra_for(role: Role) -> Self {
        match role {
            Role::Student => FieldGroup::StudentExtra,
            Role::Teacher => FieldGroup::TeacherExtra,
        }
    }
}

/// How a field's value is entered and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Secret,
    Number,
    Multiline,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Age,
        Field::Specialty,
        Field::Bio,
        Field::StudyLevel,
    ];

    /// Stable identifier of the field.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Age => "age",
            Field::Specialty => "specialty",
            Field::Bio => "bio",
            Field::StudyLevel => "studyLevel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::Age => "Age",
            Field::Specialty => "Specialty",
            Field::Bio => "Bio",
            Field::StudyLevel => "Study level",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "you@example.com",
            Field::Password => "At least 8 characters",
            Field::ConfirmPassword => "Repeat password",
            Field::Age => "13-120",
            Field::Specialty => "e.g. Mathematics",
            Field::Bio => "Tell students about yourself",
            Field::StudyLevel => "Optional",
        }
    }

    pub fn group(self) -> FieldGroup {
        match self {
            Field::Specialty | Field::Bio => FieldGroup::TeacherExtra,
            Field::StudyLevel => FieldGroup::StudentExtra,
            _ => FieldGroup::Common,
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Field::Email => InputKind::Email,
            Field::Password | Field::ConfirmPassword => InputKind::Secret,
            Field::Age => InputKind::Number,
            Field::Bio => InputKind::Multiline,
            _ => InputKind::Text,
        }
    }

    /// Returns true if the field is presented while registering `role`.
    pub fn is_visible_for(self, role: Role) -> bool {
        match self.group() {
            FieldGroup::Common => true,
            group => group == FieldGroup::extra_for(role),
        }
    }

    /// Fields presented (and validated on submit) for a role, in form order.
    pub fn visible_for(role: Role) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| field.is_visible_for(role))
            .collect()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.id() == value)
            .ok_or_else(|| format!("Unknown field: {value}"))
    }
}

/// Raw field values as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: EnumMap<Field, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field] = value.into();
    }

    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Clears every value.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}
