pub mod csv;
pub mod download;
pub mod pdf;
