//! Registration roles and the display copy attached to each.

use std::fmt;
use std::str::FromStr;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// The kind of account being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Returns the complementary role.
    pub fn other(self) -> Self {
        match self {
            Role::Student => Role::Teacher,
            Role::Teacher => Role::Student,
        }
    }

    /// Lowercase identifier, as used on the command line and in config.
    pub fn id(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }

    /// Capitalized name for user-facing text.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }

    pub fn all() -> &'static [Role] {
        &[Role::Student, Role::Teacher]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            _ => Err(format!("Unknown role: {value} (expected student or teacher)")),
        }
    }
}

/// Text and imagery swapped into the overlay for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCopy {
    pub title: String,
    pub subtitle: String,
    /// Caption drawn over the image panel (empty by default).
    #[serde(default)]
    pub label: String,
    /// Reference to the background image for the image panel.
    pub image: String,
    /// Text of the affordance that switches to the other role.
    pub switch_text: String,
}

impl RoleCopy {
    /// Built-in copy for a role.
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Student => Self {
                title: "Student registration".to_string(),
                subtitle: "Start your educational journey now".to_string(),
                label: String::new(),
                image: "images/1.jpg".to_string(),
                switch_text: "Create a teacher account instead.".to_string(),
            },
            Role::Teacher => Self {
                title: "Teacher registration".to_string(),
                subtitle: "Share your experiences with thousands of students".to_string(),
                label: String::new(),
                image: "images/3.jpg".to_string(),
                switch_text: "Create a Student account instead.".to_string(),
            },
        }
    }
}
