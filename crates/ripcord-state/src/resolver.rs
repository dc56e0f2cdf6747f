use std::sync::Arc;

use ripcord_models::{Guild, GuildChannel, User};
use serde_json::Value;

use crate::error::ResolveError;

/// Capability for turning raw nested payload fragments into canonical
/// domain objects.
///
/// Implementations typically front a process-wide registry shared between
/// the gateway and HTTP layers; whatever locking that takes is the
/// implementation's concern. The mapper hands over the fragment exactly as
/// it appeared in the payload — absent keys arrive as `None` and explicit
/// JSON `null`s arrive as `Some(&Value::Null)` — and it is the resolver's
/// decision whether either of those is acceptable.
pub trait ModelResolver {
    fn resolve_guild(&self, fragment: Option<&Value>) -> Result<Arc<Guild>, ResolveError>;

    fn resolve_channel(&self, fragment: Option<&Value>)
        -> Result<Arc<GuildChannel>, ResolveError>;

    fn resolve_user(&self, fragment: Option<&Value>) -> Result<Arc<User>, ResolveError>;
}
