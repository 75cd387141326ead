pub mod app;
pub mod create_book;
pub mod list_books;
