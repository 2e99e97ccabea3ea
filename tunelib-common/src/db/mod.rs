//! Database layer: schema initialization, seeding, per-entity operations

pub mod artists;
pub mod audios;
pub mod genres;
pub mod init;
pub mod roles;
pub mod seed;
pub mod songs;
pub mod users;
