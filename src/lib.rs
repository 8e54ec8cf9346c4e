// src/lib.rs

pub mod config;
pub mod dtos;
pub mod entity;
pub mod errors;
pub mod extractor;
pub mod filters;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod pagination;
pub mod product_specs;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod specification;
pub mod state;
