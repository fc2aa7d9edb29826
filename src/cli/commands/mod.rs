//! Command implementations.

pub mod create;
pub mod delete;
pub mod doctor;
pub mod init;
pub mod list;
pub mod serve;
pub mod show;
pub mod update;
pub mod version;
