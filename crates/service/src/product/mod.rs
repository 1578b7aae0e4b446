pub mod memory;
pub mod repository;
pub mod service;

pub use repository::{ProductStore, SeaOrmProductStore};
