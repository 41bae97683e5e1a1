pub mod admin;
pub mod content;
pub mod events;
pub mod settings;
pub mod submissions;
