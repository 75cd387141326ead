use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind},
    options::ClientOptions,
    Client, Collection,
};

use crate::config::StoreConfig;

use super::{
    book::{Book, BookDocument, NewBook},
    BookStore, StoreError,
};

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("Invalid MongoDB client options")]
    Options(#[source] MongoError),
    #[error("MongoDB did not answer the ping")]
    Ping(#[source] MongoError),
    #[error("Could not connect to MongoDB within {0:?}")]
    Timeout(Duration),
}

/// [`BookStore`] backed by a MongoDB collection.
///
/// Cloning is cheap, the underlying client is a connection pool.
#[derive(Clone)]
pub struct MongoBookStore {
    books: Collection<BookDocument>,
}

impl MongoBookStore {
    /// Connects to MongoDB and verifies the connection with a `ping`.
    ///
    /// The whole attempt is bounded by [`StoreConfig::connect_timeout`].
    #[tracing::instrument(name = "mongo_connect", skip_all, fields(uri = %config.uri))]
    pub async fn connect(config: &StoreConfig) -> Result<Self, ConnectError> {
        let timeout = config.connect_timeout;

        let client = tokio::time::timeout(timeout, Self::open_client(config))
            .await
            .map_err(|_| ConnectError::Timeout(timeout))??;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB"
        );

        let books = client
            .database(&config.database)
            .collection::<BookDocument>(&config.collection);

        Ok(Self { books })
    }

    async fn open_client(config: &StoreConfig) -> Result<Client, ConnectError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(ConnectError::Options)?;

        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options).map_err(ConnectError::Options)?;

        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(ConnectError::Ping)?;

        Ok(client)
    }
}

fn is_decode_error(err: &MongoError) -> bool {
    matches!(*err.kind, ErrorKind::BsonDeserialization(_))
}

#[async_trait]
impl BookStore for MongoBookStore {
    #[tracing::instrument(skip_all)]
    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        let mut cursor = self
            .books
            .find(None, None)
            .await
            .map_err(|err| StoreError::Fetch(err.into()))?;

        let mut books = Vec::new();

        loop {
            match cursor.try_next().await {
                Ok(Some(document)) => books.push(Book::from(document)),
                Ok(None) => break,
                Err(err) if is_decode_error(&err) => return Err(StoreError::Decode(err.into())),
                Err(err) => return Err(StoreError::Iterate(err.into())),
            }
        }

        tracing::debug!(count = books.len(), "Fetched books");

        Ok(books)
    }

    #[tracing::instrument(skip_all)]
    async fn insert_book(&self, book: NewBook) -> Result<Book, StoreError> {
        let document = BookDocument::create(book);

        self.books
            .insert_one(&document, None)
            .await
            .map_err(|err| StoreError::Insert(err.into()))?;

        Ok(Book::from(document))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use mongodb::bson::{self, doc};

    use super::*;

    #[tokio::test]
    async fn connect_fails_fast_when_mongo_is_unreachable() {
        let config = StoreConfig {
            uri: "mongodb://127.0.0.1:1".to_string(),
            connect_timeout: Duration::from_millis(300),
            ..StoreConfig::default()
        };

        let started = Instant::now();
        let result = MongoBookStore::connect(&config).await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn connect_rejects_an_invalid_uri() {
        let config = StoreConfig {
            uri: "not-a-mongodb-uri".to_string(),
            ..StoreConfig::default()
        };

        let result = MongoBookStore::connect(&config).await;

        assert!(matches!(result, Err(ConnectError::Options(_))));
    }

    #[test]
    fn bson_deserialization_is_a_decode_error() {
        let bson_err = bson::from_document::<BookDocument>(doc! { "_id": "x" })
            .expect_err("String is not an ObjectId");

        assert!(is_decode_error(&MongoError::from(bson_err)));
    }

    #[tokio::test]
    async fn other_errors_are_not_decode_errors() {
        let err = ClientOptions::parse("not-a-mongodb-uri")
            .await
            .expect_err("Invalid URI");

        assert!(!is_decode_error(&err));
    }
}
