//! # Storage Module
//!
//! Persistence layer for the expense tracker core. Repositories perform
//! whole-collection read-modify-write over a [`BlobStore`] backend; backends
//! are interchangeable (file-backed for real use, in-memory for tests).

pub mod budget_repository;
pub mod expense_repository;
pub mod json_file;
pub mod memory;
pub mod traits;

pub use budget_repository::BudgetRepository;
pub use expense_repository::ExpenseRepository;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::BlobStore;
