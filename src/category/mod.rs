//! Categories for grouping transactions.

mod api;
mod db;
mod domain;

pub use api::{create_category_endpoint, get_categories_endpoint};
pub use db::{create_category, create_category_table, get_all_categories};
pub use domain::{Category, CategoryId, CategoryName, NewCategory};
