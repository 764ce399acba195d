mod catalog;
mod matcher;
mod parse;
mod types;

pub use catalog::{SELECTABLE_INGREDIENTS, all_ingredients, filter_ingredients};
pub use matcher::{CURATED_LEN, FALLBACK_LEN, recommend, search};
pub use parse::parse_delimited_list;
pub use types::{MatchMode, Recipe};
