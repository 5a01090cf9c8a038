pub mod check;
pub mod form;
pub mod generate;
pub mod init;
pub mod list;
