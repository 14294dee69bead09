// src/integrations/mod.rs
//
// External service integrations (infrastructure, not domain)

pub mod tmdb;
