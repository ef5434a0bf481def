pub mod checksum;
pub mod cipher;
pub mod errors;
pub mod frame;
pub mod unit;
