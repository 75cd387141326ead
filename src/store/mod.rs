use async_trait::async_trait;

pub mod book;
pub mod mongo;
pub mod upload;

use book::{Book, NewBook};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to query books")]
    Fetch(#[source] BoxError),
    #[error("Failed to decode book")]
    Decode(#[source] BoxError),
    #[error("Failed to iterate over books")]
    Iterate(#[source] BoxError),
    #[error("Failed to insert book")]
    Insert(#[source] BoxError),
}

impl StoreError {
    /// Short text that is safe to hand out to clients.
    pub fn message(&self) -> &'static str {
        match self {
            StoreError::Fetch(_) => "Error fetching books",
            StoreError::Decode(_) => "Error decoding book",
            StoreError::Iterate(_) => "Error iterating over books",
            StoreError::Insert(_) => "Error inserting book",
        }
    }
}

/// Persistence of [`Book`] records.
///
/// Implementations must be safe to share between concurrently running handlers.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Returns every stored book in store order.
    ///
    /// A single undecodable document fails the whole call.
    async fn list_books(&self) -> Result<Vec<Book>, StoreError>;

    /// Assigns a fresh identifier to `book`, stores it and returns the stored record.
    async fn insert_book(&self, book: NewBook) -> Result<Book, StoreError>;
}
