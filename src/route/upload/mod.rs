pub mod app;
pub mod upload_file;
