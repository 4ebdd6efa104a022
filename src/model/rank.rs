//! Role hierarchy ranking.

use std::{cmp::Ordering, collections::HashMap};

use serenity::all::{GuildId, Role, RoleId};

/// Position of a member's highest role in the guild hierarchy.
///
/// Ordering follows Discord: a higher position ranks above a lower one, and between two
/// roles at the same position the older role (smaller snowflake) ranks above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRank {
    pub position: u16,
    pub role_id: u64,
}

impl RoleRank {
    /// Rank of the `@everyone` role, which shares its ID with the guild.
    pub fn everyone(guild_id: GuildId) -> Self {
        Self {
            position: 0,
            role_id: guild_id.get(),
        }
    }

    pub fn of_role(role: &Role) -> Self {
        Self {
            position: role.position,
            role_id: role.id.get(),
        }
    }

    /// Highest rank among the given role IDs.
    ///
    /// Role IDs missing from `roles` are ignored; a member without any known role ranks
    /// as `@everyone`.
    pub fn highest(
        guild_id: GuildId,
        roles: &HashMap<RoleId, Role>,
        member_roles: &[RoleId],
    ) -> Self {
        member_roles
            .iter()
            .filter_map(|id| roles.get(id))
            .map(Self::of_role)
            .max()
            .unwrap_or_else(|| Self::everyone(guild_id))
    }
}

impl Ord for RoleRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position
            .cmp(&other.position)
            .then_with(|| other.role_id.cmp(&self.role_id))
    }
}

impl PartialOrd for RoleRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
