//! Storage implementations for record repositories

pub mod in_memory;

pub use in_memory::InMemoryRepository;
