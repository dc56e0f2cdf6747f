use std::sync::Arc;

use dashmap::DashMap;
use ripcord_models::{Guild, GuildChannel, User};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ResolveError;
use crate::resolver::ModelResolver;

/// In-memory registry of canonical domain objects, keyed by id.
///
/// Fragments are materialized through serde and interned; the latest
/// fragment for an id wins. There is no eviction or invalidation — entries
/// live as long as the registry does.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    guilds: DashMap<i64, Arc<Guild>>,
    channels: DashMap<i64, Arc<GuildChannel>>,
    users: DashMap<i64, Arc<User>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guild(&self, id: i64) -> Option<Arc<Guild>> {
        self.guilds.get(&id).map(|entry| Arc::clone(&entry))
    }

    pub fn channel(&self, id: i64) -> Option<Arc<GuildChannel>> {
        self.channels.get(&id).map(|entry| Arc::clone(&entry))
    }

    pub fn user(&self, id: i64) -> Option<Arc<User>> {
        self.users.get(&id).map(|entry| Arc::clone(&entry))
    }

    fn materialize<T: DeserializeOwned>(
        kind: &'static str,
        fragment: Option<&Value>,
    ) -> Result<T, ResolveError> {
        let fragment = match fragment {
            None | Some(Value::Null) => return Err(ResolveError::MissingFragment(kind)),
            Some(value) => value,
        };
        serde_json::from_value(fragment.clone()).map_err(|e| ResolveError::InvalidFragment {
            kind,
            reason: e.to_string(),
        })
    }
}

impl ModelResolver for ModelRegistry {
    fn resolve_guild(&self, fragment: Option<&Value>) -> Result<Arc<Guild>, ResolveError> {
        let guild: Guild = Self::materialize("guild", fragment)?;
        let guild = Arc::new(guild);
        self.guilds.insert(guild.id, Arc::clone(&guild));
        Ok(guild)
    }

    fn resolve_channel(
        &self,
        fragment: Option<&Value>,
    ) -> Result<Arc<GuildChannel>, ResolveError> {
        let channel: GuildChannel = Self::materialize("channel", fragment)?;
        let channel = Arc::new(channel);
        self.channels.insert(channel.id, Arc::clone(&channel));
        Ok(channel)
    }

    fn resolve_user(&self, fragment: Option<&Value>) -> Result<Arc<User>, ResolveError> {
        let user: User = Self::materialize("user", fragment)?;
        let user = Arc::new(user);
        self.users.insert(user.id, Arc::clone(&user));
        Ok(user)
    }
}
