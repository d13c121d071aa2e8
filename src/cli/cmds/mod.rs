pub mod cats;
pub mod codes;
pub mod init;
pub mod plot;
pub mod prices;
pub mod rm;
pub mod root;
pub mod sales;
pub mod upload;
