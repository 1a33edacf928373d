pub mod grouping;
pub mod report;
pub mod stats;

pub use grouping::{CategoryGroup, CategoryGroups};
pub use report::{sorted_by, Currency, InventoryReport};
pub use stats::{total_inventory_value, PriceStats};
