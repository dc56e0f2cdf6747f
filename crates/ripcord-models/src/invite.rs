use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::channel::GuildChannel;
use crate::guild::Guild;
use crate::user::User;

/// A code that, when redeemed, adds a user to a guild channel.
///
/// The guild and channel are canonical objects owned by the resolver that
/// built this record; the invite only holds shared handles to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Invite {
    /// The unique invite code. Always present in practice, but the API
    /// contract does not guarantee it.
    pub code: Option<String>,
    /// The guild the invite is for.
    pub guild: Arc<Guild>,
    /// The channel the invite points to.
    pub channel: Arc<GuildChannel>,
    /// Approximate count of online members, when the API chose to send it.
    pub approximate_presence_count: Option<i64>,
    /// Approximate count of total members, when the API chose to send it.
    pub approximate_member_count: Option<i64>,
}

/// Usage and lifecycle facts about one invite.
///
/// Only certain API responses include these fields; a `None` in a field the
/// domain treats as always-present (`uses`, `max_uses`, `max_age`) means the
/// upstream payload omitted it.
#[derive(Debug, Clone, PartialEq)]
pub struct InviteMetadata {
    /// The user who created the invite.
    pub inviter: Arc<User>,
    /// Times the invite has been redeemed so far.
    pub uses: Option<i64>,
    /// Redemption ceiling. 0 conventionally means unlimited; enforcing that
    /// convention is the caller's business.
    pub max_uses: Option<i64>,
    /// Seconds from creation until expiry. 0 conventionally means never.
    pub max_age: Option<i64>,
    /// Whether redeeming grants temporary membership only.
    pub temporary: Option<bool>,
    /// When the invite was created, offset preserved from the payload.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Whether the invite has been invalidated.
    pub revoked: Option<bool>,
}
