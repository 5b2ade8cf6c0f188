//! Use-case layer for the blog service.
//!
//! Sits between the HTTP surface and the repository. Today every operation is
//! a direct delegate; rules such as authorization or derived fields belong
//! here so neither the transport nor the storage layer has to change.
//!
//! Also hosts the seeding utility that loads posts from a JSON file at
//! startup.

pub mod seed;
pub mod service;
pub mod usecase;

pub use seed::{
    load_seed_file, parse_seed, seed_from_file, seed_posts, SeedError, SeedFile, SeedPost,
    SeedResult,
};
pub use service::BlogService;
pub use usecase::BlogUseCase;
