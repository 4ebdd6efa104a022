//! Domain models shared by the services and the bot layer.
//!
//! These types carry no Discord client state; they are built from Serenity models at the
//! bot boundary so the decision logic in `service` stays pure and testable.

pub mod nickname;
pub mod panel;
pub mod rank;
