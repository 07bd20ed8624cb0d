pub mod asset;
pub mod config;
pub mod init;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod role;
pub mod task;
pub mod template;
pub mod user;
pub mod whoami;
