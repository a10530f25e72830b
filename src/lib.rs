pub mod assistant;
pub mod catalog;
pub mod config;
pub mod model;
pub mod web;
