pub mod inmemory_repo;
pub mod json_file;
