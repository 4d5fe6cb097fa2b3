//! Application service layer - form controller, config, registration use case

pub mod app;
pub mod config;
pub mod form;
pub mod notification;
pub mod repository;
