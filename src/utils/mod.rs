pub mod billing;
pub mod mail;
pub mod provision;
pub mod slug;
pub mod stripe;
pub mod token;
pub mod webutils;
