use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

pub const EXPIRY_FORMAT: &str = "%Y-%m-%d";

/// A single inventory item as read from one line of the products file.
///
/// Price and quantity are taken as given; negative values and past expiry
/// dates are not rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    category: String,
    price: f64,
    quantity: i32,
    expiry: NaiveDate,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i32,
        expiry: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            expiry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }

    /// Stock value of this line item: `price * quantity`.
    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | R${:.2} | Qtd: {} | Val: {}",
            self.name,
            self.category,
            self.price,
            self.quantity,
            self.expiry.format(EXPIRY_FORMAT)
        )
    }
}

/// Default product ordering: ascending price, then case-insensitive name.
pub fn by_price_then_name(a: &Product, b: &Product) -> Ordering {
    a.price
        .total_cmp(&b.price)
        .then_with(|| cmp_ignore_case(&a.name, &b.name))
}

pub fn by_expiry(a: &Product, b: &Product) -> Ordering {
    a.expiry.cmp(&b.expiry)
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
