//! Blogger API access

pub mod client;

pub use client::BloggerClient;
