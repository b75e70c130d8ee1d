mod cart;
mod file_store;

pub use cart::CartRepositoryInMemory;
pub use file_store::FileSessionStore;
