pub mod mongo_scan_repo;

pub use mongo_scan_repo::*;
