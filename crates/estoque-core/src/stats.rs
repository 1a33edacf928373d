use std::cmp::Ordering;

use estoque_parser::Product;

/// Summary of product prices. Only built for a non-empty product list.
#[derive(Debug, Clone, Copy)]
pub struct PriceStats<'a> {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub cheapest: &'a Product,
    pub most_expensive: &'a Product,
}

impl<'a> PriceStats<'a> {
    pub fn compute(products: &'a [Product]) -> Option<Self> {
        let (first, rest) = products.split_first()?;

        let mut cheapest = first;
        let mut most_expensive = first;
        let mut sum = first.price();

        for product in rest {
            sum += product.price();
            // Strict comparisons keep the first occurrence on ties.
            if product.price().total_cmp(&cheapest.price()) == Ordering::Less {
                cheapest = product;
            }
            if product.price().total_cmp(&most_expensive.price()) == Ordering::Greater {
                most_expensive = product;
            }
        }

        let count = products.len();
        Some(Self {
            count,
            mean: sum / count as f64,
            min: cheapest.price(),
            max: most_expensive.price(),
            cheapest,
            most_expensive,
        })
    }
}

pub fn total_inventory_value(products: &[Product]) -> f64 {
    products.iter().map(Product::total_value).sum()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn product(name: &str, price: f64, quantity: i32) -> Product {
        let expiry = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Product::new(name, "Geral", price, quantity, expiry)
    }

    #[test]
    fn empty_list_has_no_stats() {
        assert!(PriceStats::compute(&[]).is_none());
        assert_eq!(total_inventory_value(&[]), 0.0);
    }

    #[test]
    fn computes_mean_and_extremes() {
        let products = vec![product("Leite", 4.5, 10), product("Pao", 7.0, 5)];
        let stats = PriceStats::compute(&products).unwrap();

        assert_eq!(stats.count, 2);
        assert!((stats.mean - 5.75).abs() < 1e-9);
        assert_eq!(stats.min, 4.5);
        assert_eq!(stats.max, 7.0);
        assert_eq!(stats.cheapest.name(), "Leite");
        assert_eq!(stats.most_expensive.name(), "Pao");
        assert!((total_inventory_value(&products) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn first_occurrence_wins_on_ties() {
        let products = vec![
            product("A", 3.0, 1),
            product("B", 1.0, 1),
            product("C", 3.0, 1),
            product("D", 1.0, 1),
        ];
        let stats = PriceStats::compute(&products).unwrap();
        assert_eq!(stats.cheapest.name(), "B");
        assert_eq!(stats.most_expensive.name(), "A");
    }

    #[test]
    fn single_product_is_both_extremes() {
        let products = vec![product("Sal", 2.25, 0)];
        let stats = PriceStats::compute(&products).unwrap();
        assert_eq!(stats.mean, 2.25);
        assert_eq!(stats.cheapest, stats.most_expensive);
        assert_eq!(total_inventory_value(&products), 0.0);
    }
}
