//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryBookRepository;
pub use postgres::PgBookRepository;
