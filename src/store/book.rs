use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A book as it is sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Hex encoded document id.
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
}

/// A book as it is received from clients.
///
/// Any `id` sent along is ignored. Capitalized keys are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NewBook {
    #[serde(alias = "Title", alias = "TITLE")]
    pub title: String,
    #[serde(alias = "Author", alias = "AUTHOR")]
    pub author: String,
    #[serde(alias = "Genre", alias = "GENRE")]
    pub genre: String,
    #[serde(alias = "Description", alias = "DESCRIPTION")]
    pub description: String,
}

/// A book as it is stored in the `books` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
}

impl BookDocument {
    /// Creates a document with a freshly generated id.
    pub fn create(book: NewBook) -> Self {
        Self::with_id(ObjectId::new(), book)
    }

    pub fn with_id(id: ObjectId, book: NewBook) -> Self {
        let NewBook {
            title,
            author,
            genre,
            description,
        } = book;

        Self {
            id,
            title,
            author,
            genre,
            description,
        }
    }
}

impl From<BookDocument> for Book {
    fn from(document: BookDocument) -> Self {
        Self {
            id: document.id.to_hex(),
            title: document.title,
            author: document.author,
            genre: document.genre,
            description: document.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{self, doc};

    use super::*;

    #[test]
    fn new_book_ignores_client_id_and_defaults_missing_fields() {
        let book: NewBook =
            serde_json::from_str(r#"{"id":"abc","title":"Dune"}"#).expect("Valid new book");

        assert_eq!(
            book,
            NewBook {
                title: "Dune".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn new_book_accepts_capitalized_keys() {
        let book: NewBook = serde_json::from_str(
            r#"{"Title":"Dune","Author":"Frank Herbert","Genre":"Sci-Fi","Description":"Desert planet"}"#,
        )
        .expect("Valid new book");

        assert_eq!(
            book,
            NewBook {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                genre: "Sci-Fi".to_string(),
                description: "Desert planet".to_string(),
            }
        );
    }

    #[test]
    fn new_book_rejects_wrong_types() {
        assert!(serde_json::from_str::<NewBook>(r#"{"title":42}"#).is_err());
    }

    #[test]
    fn created_documents_get_distinct_non_zero_ids() {
        let first = BookDocument::create(NewBook::default());
        let second = BookDocument::create(NewBook::default());

        assert_ne!(first.id, second.id);
        assert_ne!(Book::from(first).id, "000000000000000000000000");
    }

    #[test]
    fn document_is_stored_with_underscore_id() {
        let document = BookDocument::create(NewBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "Sci-Fi".to_string(),
            description: "Desert planet".to_string(),
        });

        let stored = bson::to_document(&document).expect("Serializable document");

        assert_eq!(stored.get_object_id("_id").ok(), Some(document.id));
        assert_eq!(stored.get_str("title").ok(), Some("Dune"));
        assert!(!stored.contains_key("id"));
    }

    #[test]
    fn document_with_missing_fields_decodes_to_empty_strings() {
        let id = ObjectId::new();
        let document: BookDocument =
            bson::from_document(doc! { "_id": id, "title": "Dune" }).expect("Decodable document");

        let book = Book::from(document);

        assert_eq!(book.id, id.to_hex());
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "");
    }

    #[test]
    fn document_with_wrong_field_type_fails_to_decode() {
        let decoded =
            bson::from_document::<BookDocument>(doc! { "_id": ObjectId::new(), "title": 7 });

        assert!(decoded.is_err());
    }

    #[test]
    fn book_is_sent_with_hex_id() {
        let id = ObjectId::new();
        let book = Book::from(BookDocument::with_id(id, NewBook::default()));

        let json = serde_json::to_value(&book).expect("Serializable book");

        assert_eq!(json["id"], serde_json::Value::String(id.to_hex()));
        assert_eq!(json["description"], "");
    }
}
