use serde::{Deserialize, Serialize};

use super::field_contains;
use crate::access::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Blocked,
}

/// A user record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<AccountStatus>,
}

impl UserAccount {
    /// Stored role; records without one, or with a blank one, are plain users.
    pub fn role(&self) -> Role {
        Role::from_stored(self.role.as_deref())
    }

    pub fn status(&self) -> AccountStatus {
        self.status.unwrap_or_default()
    }
}

/// Filter the Manage Users table.
///
/// `search` matches name or email, ignoring case. `role` keeps only accounts
/// whose effective role is exactly that role.
pub fn filter_users<'a>(
    users: &'a [UserAccount],
    search: &str,
    role: Option<Role>,
) -> Vec<&'a UserAccount> {
    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|u| {
            needle.is_empty()
                || field_contains(u.name.as_deref(), &needle)
                || field_contains(Some(u.email.as_str()), &needle)
        })
        .filter(|u| role.map_or(true, |r| u.role() == r))
        .collect()
}

/// Head counts for the admin overview chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCounts {
    pub admin_count: usize,
    pub seller_count: usize,
    pub user_count: usize,
    pub total_users: usize,
}

pub fn role_counts(users: &[UserAccount]) -> RoleCounts {
    users.iter().fold(RoleCounts::default(), |mut counts, user| {
        match user.role() {
            Role::Admin => counts.admin_count += 1,
            Role::Seller => counts.seller_count += 1,
            Role::User => counts.user_count += 1,
            Role::Guest => {}
        }
        counts.total_users += 1;
        counts
    })
}
