pub mod init;
pub mod migrate;
pub mod validate;
