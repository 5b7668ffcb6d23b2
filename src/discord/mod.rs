//! Discord webhook delivery for detected signals

pub mod client;

pub use client::DiscordNotifier;
