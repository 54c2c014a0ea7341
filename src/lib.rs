pub mod models;
pub mod registry;
pub mod services;
pub mod web;
