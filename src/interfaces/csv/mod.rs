pub mod share_writer;
