//! Infrastructure layer - Persistence media, services and collaborators

pub mod logging;
pub mod navigation;
pub mod storage;
pub mod user;
