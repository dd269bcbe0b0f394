//! Roastify bot: roast commands, leaderboard, and admin commands over Telegram.

pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
