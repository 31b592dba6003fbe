mod health;
mod products;
mod root;

pub use health::{health, StoreHealth};
pub use products::{create_product, delete_product, get_product, update_product};
pub use root::{method_not_allowed, root, unknown_route};
