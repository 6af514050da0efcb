pub mod event;
pub mod membership;
pub mod role;
pub mod sync;
