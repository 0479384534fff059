//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Category and note
//! repositories additionally take an [`OwnerScope`](crate::scope::OwnerScope).

pub mod account_repo;
pub mod category_repo;
pub mod note_repo;
pub mod session_repo;

pub use account_repo::AccountRepo;
pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
pub use session_repo::SessionRepo;
