//! Nest & Nourish API - backend for a postpartum wellness tracker
//!
//! This crate provides the REST API for Nest & Nourish, enabling:
//! - Account registration, login and profile management
//! - Logging exercises, exercise progress and wellness check-ins
//! - Content personalized to the user's postpartum month and recovery stage
//! - Administrative maintenance of the content catalog

pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod personalization;
pub mod routes;
pub mod services;
pub mod sessions;
pub mod state;
