pub mod csv_export;
pub mod dates;
pub mod local_store;
