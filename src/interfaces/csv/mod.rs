pub mod cart_reader;
pub mod payable_writer;
