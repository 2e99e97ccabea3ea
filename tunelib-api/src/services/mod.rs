//! Service layer: entity/DTO translation and listing
//!
//! One service per entity kind. Services own the NotFound policy: a get or
//! update against an absent id fails distinguishably, a delete of an absent
//! id passes through silently. Deletes of parents still referenced by other
//! rows surface the storage engine's constraint error unmodified.

pub mod artists;
pub mod audios;
pub mod genres;
pub mod roles;
pub mod songs;
pub mod users;
