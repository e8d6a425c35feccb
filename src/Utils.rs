/// reading and writing JSON documents with error location reporting
pub mod load_from_file;
pub mod logger;
