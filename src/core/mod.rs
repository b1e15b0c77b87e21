pub mod add;
pub mod context;
pub mod dispatch;
pub mod loader;
pub mod search;
pub mod tracker;

#[cfg(test)]
pub(crate) mod testing;
