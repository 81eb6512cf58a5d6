pub mod memory;

pub use linkify_core::LinkStore;
pub use memory::InMemoryLinkStore;
