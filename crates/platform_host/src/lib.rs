//! Typed host-domain contracts used by the reader state containers and browser adapters.
//!
//! This crate is the API-first boundary for persistence. It exposes the synchronous
//! [`PrefsStore`] service trait plus in-memory and no-op implementations, while the concrete
//! `localStorage` adapter lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore,
};
