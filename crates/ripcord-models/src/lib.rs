pub mod channel;
pub mod guild;
pub mod invite;
pub mod user;

pub use channel::{ChannelKind, GuildChannel};
pub use guild::Guild;
pub use invite::{Invite, InviteMetadata};
pub use user::User;
