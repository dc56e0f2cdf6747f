//! Mapping of invite payloads into typed records.
//!
//! One linear pass per payload: scalars go through the typed accessors in
//! [`crate::payload`], nested objects go to the resolver untouched. A build
//! either returns a fully populated record or fails with the first error —
//! no partial records.

use ripcord_models::{Invite, InviteMetadata};
use serde_json::Value;

use crate::error::StateError;
use crate::payload;
use crate::resolver::ModelResolver;

/// Builds an [`Invite`] from a raw API payload.
pub fn build_invite<R: ModelResolver>(
    resolver: &R,
    payload: &Value,
) -> Result<Invite, StateError> {
    Ok(Invite {
        code: payload::opt_str(payload, "code")?,
        guild: resolver.resolve_guild(payload.get("guild"))?,
        channel: resolver.resolve_channel(payload.get("channel"))?,
        approximate_presence_count: payload::opt_i64(payload, "approximate_presence_count")?,
        approximate_member_count: payload::opt_i64(payload, "approximate_member_count")?,
    })
}

/// Builds an [`InviteMetadata`] from a raw API payload.
///
/// `uses`, `max_uses` and `max_age` are semantically always present, but
/// follow the same absence-is-`None` convention as every other scalar;
/// consumers should treat `None` there as an upstream data-quality defect.
pub fn build_invite_metadata<R: ModelResolver>(
    resolver: &R,
    payload: &Value,
) -> Result<InviteMetadata, StateError> {
    Ok(InviteMetadata {
        inviter: resolver.resolve_user(payload.get("inviter"))?,
        uses: payload::opt_i64(payload, "uses")?,
        max_uses: payload::opt_i64(payload, "max_uses")?,
        max_age: payload::opt_i64(payload, "max_age")?,
        temporary: payload::opt_bool(payload, "temporary")?,
        created_at: payload::opt_timestamp(payload, "created_at")?,
        revoked: payload::opt_bool(payload, "revoked")?,
    })
}
