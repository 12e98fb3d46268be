//! Roles and their static permission definitions.
//!
//! An employee's role is a closed enumeration. Strings that do not name one
//! of the four fixed roles are kept verbatim in [`Role::Unknown`] so they
//! survive a round trip, and are shown with the `employee` definition.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

// ─── Role ────────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, PartialEq, Eq, Hash, Default, AsRefStr, EnumString,
  Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
  Admin,
  Manager,
  Developer,
  #[default]
  Employee,
  /// A role string outside the fixed set, preserved as given.
  #[strum(default)]
  Unknown(String),
}

impl Role {
  /// The fixed roles, in display order.
  pub const KNOWN: [Role; 4] =
    [Role::Admin, Role::Manager, Role::Developer, Role::Employee];

  /// The stored identifier, e.g. `"admin"`.
  pub fn key(&self) -> &str {
    match self {
      Self::Unknown(raw) => raw,
      known => known.as_ref(),
    }
  }

  pub fn is_known(&self) -> bool { !matches!(self, Self::Unknown(_)) }

  /// Static metadata for this role; unknown roles use the `employee` entry.
  pub fn definition(&self) -> &'static RoleDefinition {
    match self {
      Self::Admin => &DEFINITIONS[0],
      Self::Manager => &DEFINITIONS[1],
      Self::Developer => &DEFINITIONS[2],
      Self::Employee | Self::Unknown(_) => &DEFINITIONS[3],
    }
  }

  /// The next fixed role in display order, wrapping around. Unknown roles
  /// step to `Admin`.
  pub fn next_known(&self) -> Role {
    let pos = Self::KNOWN.iter().position(|r| r == self);
    match pos {
      Some(i) => Self::KNOWN[(i + 1) % Self::KNOWN.len()].clone(),
      None => Role::Admin,
    }
  }
}

impl From<String> for Role {
  fn from(raw: String) -> Self {
    // `strum(default)` makes parsing infallible.
    Role::from_str(&raw).unwrap_or(Role::Unknown(raw))
  }
}

impl From<Role> for String {
  fn from(role: Role) -> Self {
    match role {
      Role::Unknown(raw) => raw,
      known => known.as_ref().to_owned(),
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

// ─── Definitions ─────────────────────────────────────────────────────────────

/// Display metadata for a role. Not user-editable.
#[derive(Debug, PartialEq, Eq)]
pub struct RoleDefinition {
  pub key:         &'static str,
  pub name:        &'static str,
  pub description: &'static str,
  /// Permission tags, in display order.
  pub permissions: &'static [&'static str],
  /// Colour tag used by the presentation layer.
  pub color:       &'static str,
}

impl RoleDefinition {
  pub fn grants(&self, permission: &str) -> bool {
    self.permissions.contains(&permission)
  }
}

static DEFINITIONS: [RoleDefinition; 4] = [
  RoleDefinition {
    key:         "admin",
    name:        "Administrator",
    description: "Full system access and user management",
    permissions: &[
      "manage_users",
      "manage_departments",
      "manage_settings",
      "view_reports",
      "manage_salaries",
    ],
    color:       "red",
  },
  RoleDefinition {
    key:         "manager",
    name:        "Manager",
    description: "Department management and team oversight",
    permissions: &[
      "manage_team",
      "view_reports",
      "approve_requests",
      "manage_schedules",
    ],
    color:       "blue",
  },
  RoleDefinition {
    key:         "developer",
    name:        "Developer",
    description: "Technical development and system maintenance",
    permissions: &[
      "access_development",
      "manage_projects",
      "view_code",
      "deploy_applications",
    ],
    color:       "green",
  },
  RoleDefinition {
    key:         "employee",
    name:        "Employee",
    description: "Standard user access",
    permissions: &["view_profile", "update_profile", "view_schedule"],
    color:       "gray",
  },
];
