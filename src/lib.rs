pub mod accounts;
pub mod auth;
pub mod config;
pub mod jobs;
pub mod scrape;
pub mod web;
