pub mod health;
pub mod threads;
pub mod documents;
pub mod chat;
pub mod messages;
