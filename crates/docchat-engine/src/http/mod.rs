mod client;

pub use client::{HttpRagEngine, THREAD_ID_HEADER};
