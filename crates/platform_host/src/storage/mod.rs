//! Persistence contracts shared by host adapters.

pub mod prefs;
