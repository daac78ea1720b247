pub mod member;
pub mod split_vault;

pub use member::*;
pub use split_vault::*;
