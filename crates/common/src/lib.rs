pub mod auth;
pub mod branch_form;
pub mod listing;
pub mod masks;
pub mod models;
pub mod network;
pub mod notice;
pub mod payment;
pub mod services;
