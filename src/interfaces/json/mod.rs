pub mod assignment_reader;
pub mod scan_reader;
