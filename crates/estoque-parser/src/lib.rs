pub mod errors;
pub mod loader;
pub mod model;

pub use errors::{FormatError, LoadError, EXPECTED_FIELDS};
pub use loader::{load_from_reader, load_products, parse_line, parse_products, FIELD_SEPARATOR};
pub use model::{by_expiry, by_price_then_name, Product, EXPIRY_FORMAT};
