pub mod postgres_service;

mod invitations;
mod members;
mod subscriptions;
mod users;
mod workspaces;

pub use invitations::INVITE_TTL_DAYS;
pub use subscriptions::SubscriptionUpsert;
