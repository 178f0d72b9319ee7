pub mod csv_tables;

pub use csv_tables::load_tables;
