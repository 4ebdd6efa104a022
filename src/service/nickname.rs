//! Wait mode toggle decisions.
//!
//! A member is in wait mode while their nickname starts with the configured prefix.
//! Pressing a panel button evaluates the preconditions below, in order, and either
//! rejects the press, reports that nothing needs to change, or yields the nickname to
//! write. No Discord state is touched here.
//!
//! Preconditions, each rejecting the press on failure:
//! 1. The member is not the guild owner (Discord never lets bots rename the owner).
//! 2. The bot has the Manage Nicknames permission in the interaction's context.
//! 3. The bot's highest role ranks strictly above the member's highest role.

use crate::model::{nickname::NicknamePrefix, rank::RoleRank};

/// Everything the toggle needs to know about the pressing member and the bot.
#[derive(Debug, Clone)]
pub struct ToggleContext {
    pub is_owner: bool,
    pub bot_can_manage_nicknames: bool,
    pub bot_rank: RoleRank,
    pub member_rank: RoleRank,
    /// Guild nickname, `None` when the member shows their account name.
    pub nickname: Option<String>,
    pub username: String,
}

impl ToggleContext {
    /// The name currently shown in the guild: nickname if set, else username.
    pub fn current_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }
}

/// Why a button press was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    GuildOwner,
    MissingManageNicknames,
    RoleHierarchy,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Self::GuildOwner => "The server owner's nickname cannot be changed by the bot.",
            Self::MissingManageNicknames => "The bot is missing the Manage Nicknames permission.",
            Self::RoleHierarchy => "The bot's role is not above your highest role.",
        }
    }
}

/// Outcome of evaluating a button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleDecision {
    Rejected(Rejection),
    AlreadyActive,
    AlreadyInactive,
    /// Write this nickname.
    Rename(String),
}

/// The two panel actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Activate,
    Deactivate,
}

impl ToggleAction {
    pub fn evaluate(self, prefix: &NicknamePrefix, context: &ToggleContext) -> ToggleDecision {
        match self {
            Self::Activate => evaluate_activate(prefix, context),
            Self::Deactivate => evaluate_deactivate(prefix, context),
        }
    }

    /// Audit log reason attached to the nickname edit.
    pub fn audit_reason(self) -> &'static str {
        match self {
            Self::Activate => "wait mode on",
            Self::Deactivate => "wait mode off",
        }
    }

    /// Ephemeral reply after a successful edit.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Activate => "✅ Wait mode activated!",
            Self::Deactivate => "✅ Wait mode deactivated.",
        }
    }
}

fn check_preconditions(context: &ToggleContext) -> Option<Rejection> {
    if context.is_owner {
        return Some(Rejection::GuildOwner);
    }
    if !context.bot_can_manage_nicknames {
        return Some(Rejection::MissingManageNicknames);
    }
    if context.bot_rank <= context.member_rank {
        return Some(Rejection::RoleHierarchy);
    }
    None
}

/// Evaluates the activate button.
///
/// The target is the prefix followed by the fully stripped current name. The press is a
/// no-op only when the member's nickname already equals that target; a member without
/// a nickname always gets one.
pub fn evaluate_activate(prefix: &NicknamePrefix, context: &ToggleContext) -> ToggleDecision {
    if let Some(rejection) = check_preconditions(context) {
        return ToggleDecision::Rejected(rejection);
    }

    let target = prefix.apply(context.current_name());

    if context.nickname.as_deref() == Some(target.as_str()) {
        return ToggleDecision::AlreadyActive;
    }

    ToggleDecision::Rename(target)
}

/// Evaluates the deactivate button.
///
/// Strips every leading prefix from the current name; when there was nothing to strip
/// the member is already inactive.
pub fn evaluate_deactivate(prefix: &NicknamePrefix, context: &ToggleContext) -> ToggleDecision {
    if let Some(rejection) = check_preconditions(context) {
        return ToggleDecision::Rejected(rejection);
    }

    let current = context.current_name();

    if !prefix.is_applied(current) {
        return ToggleDecision::AlreadyInactive;
    }

    ToggleDecision::Rename(prefix.strip_all(current).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix() -> NicknamePrefix {
        NicknamePrefix::new("WAIT_")
    }

    fn context(nickname: Option<&str>, username: &str) -> ToggleContext {
        ToggleContext {
            is_owner: false,
            bot_can_manage_nicknames: true,
            bot_rank: RoleRank {
                position: 10,
                role_id: 500,
            },
            member_rank: RoleRank {
                position: 2,
                role_id: 600,
            },
            nickname: nickname.map(str::to_string),
            username: username.to_string(),
        }
    }

    fn apply(decision: ToggleDecision, context: &mut ToggleContext) {
        if let ToggleDecision::Rename(nick) = decision {
            context.nickname = Some(nick);
        }
    }

    #[test]
    fn activate_then_activate_again_is_idempotent() {
        let prefix = prefix();
        let mut ctx = context(Some("Alice"), "alice");

        let first = evaluate_activate(&prefix, &ctx);
        assert_eq!(first, ToggleDecision::Rename("WAIT_Alice".to_string()));
        apply(first, &mut ctx);

        assert_eq!(evaluate_activate(&prefix, &ctx), ToggleDecision::AlreadyActive);
        assert_eq!(ctx.nickname.as_deref(), Some("WAIT_Alice"));
    }

    #[test]
    fn activate_uses_username_without_nickname() {
        assert_eq!(
            evaluate_activate(&prefix(), &context(None, "alice")),
            ToggleDecision::Rename("WAIT_alice".to_string())
        );
    }

    #[test]
    fn activate_sets_nickname_even_when_username_is_prefixed() {
        // The username is not a nickname, so the target must still be written.
        assert_eq!(
            evaluate_activate(&prefix(), &context(None, "WAIT_alice")),
            ToggleDecision::Rename("WAIT_alice".to_string())
        );
    }

    #[test]
    fn activate_collapses_repeated_prefixes() {
        assert_eq!(
            evaluate_activate(&prefix(), &context(Some("WAIT_WAIT_Bob"), "bob")),
            ToggleDecision::Rename("WAIT_Bob".to_string())
        );
    }

    #[test]
    fn deactivate_strips_all_prefixes_at_once() {
        assert_eq!(
            evaluate_deactivate(&prefix(), &context(Some("WAIT_WAIT_Bob"), "bob")),
            ToggleDecision::Rename("Bob".to_string())
        );
    }

    #[test]
    fn deactivate_without_prefix_is_already_inactive() {
        assert_eq!(
            evaluate_deactivate(&prefix(), &context(Some("Bob"), "bob")),
            ToggleDecision::AlreadyInactive
        );
        assert_eq!(
            evaluate_deactivate(&prefix(), &context(None, "bob")),
            ToggleDecision::AlreadyInactive
        );
    }

    #[test]
    fn deactivate_after_activate_restores_name() {
        let prefix = prefix();
        let mut ctx = context(Some("Alice"), "alice");

        apply(evaluate_activate(&prefix, &ctx), &mut ctx);
        apply(evaluate_deactivate(&prefix, &ctx), &mut ctx);

        assert_eq!(ctx.nickname.as_deref(), Some("Alice"));
    }

    #[test]
    fn owner_is_rejected_first() {
        let mut ctx = context(Some("Alice"), "alice");
        ctx.is_owner = true;
        ctx.bot_can_manage_nicknames = false;

        for action in [ToggleAction::Activate, ToggleAction::Deactivate] {
            assert_eq!(
                action.evaluate(&prefix(), &ctx),
                ToggleDecision::Rejected(Rejection::GuildOwner)
            );
        }
    }

    #[test]
    fn missing_permission_is_rejected() {
        let mut ctx = context(Some("Alice"), "alice");
        ctx.bot_can_manage_nicknames = false;

        assert_eq!(
            evaluate_activate(&prefix(), &ctx),
            ToggleDecision::Rejected(Rejection::MissingManageNicknames)
        );
    }

    #[test]
    fn bot_below_member_is_rejected() {
        let mut ctx = context(Some("WAIT_Alice"), "alice");
        ctx.member_rank = RoleRank {
            position: 20,
            role_id: 600,
        };

        for action in [ToggleAction::Activate, ToggleAction::Deactivate] {
            assert_eq!(
                action.evaluate(&prefix(), &ctx),
                ToggleDecision::Rejected(Rejection::RoleHierarchy)
            );
        }
    }

    #[test]
    fn equal_rank_is_rejected() {
        let mut ctx = context(Some("Alice"), "alice");
        ctx.member_rank = ctx.bot_rank;

        assert_eq!(
            evaluate_activate(&prefix(), &ctx),
            ToggleDecision::Rejected(Rejection::RoleHierarchy)
        );
    }

    #[test]
    fn rejection_messages_are_distinct() {
        let messages = [
            Rejection::GuildOwner.message(),
            Rejection::MissingManageNicknames.message(),
            Rejection::RoleHierarchy.message(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }
}
