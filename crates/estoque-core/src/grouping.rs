use std::collections::HashMap;

use estoque_parser::Product;

#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub products: Vec<&'a Product>,
}

/// Products grouped by category. Groups keep the order in which their
/// category was first seen, and members keep their input order.
#[derive(Debug, Clone, Default)]
pub struct CategoryGroups<'a> {
    groups: Vec<CategoryGroup<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> CategoryGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: &'a [Product]) -> Self {
        let mut groups = Self::new();
        for product in products {
            groups.push(product);
        }
        groups
    }

    pub fn push(&mut self, product: &'a Product) {
        let category = product.category();
        let slot = match self.index.get(category).copied() {
            Some(slot) => slot,
            None => {
                self.groups.push(CategoryGroup {
                    category,
                    products: Vec::new(),
                });
                self.index.insert(category, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[slot].products.push(product);
    }

    pub fn get(&self, category: &str) -> Option<&CategoryGroup<'a>> {
        self.index.get(category).map(|&slot| &self.groups[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<'a>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn product(name: &str, category: &str) -> Product {
        let expiry = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Product::new(name, category, 1.0, 1, expiry)
    }

    #[test]
    fn keeps_first_seen_category_order() {
        let products = vec![
            product("b1", "B"),
            product("a1", "A"),
            product("b2", "B"),
            product("a2", "A"),
        ];
        let groups = CategoryGroups::from_products(&products);

        let order: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(order, ["B", "A"]);

        let b: Vec<&str> = groups.get("B").unwrap().products.iter().map(|p| p.name()).collect();
        assert_eq!(b, ["b1", "b2"]);
        let a: Vec<&str> = groups.get("A").unwrap().products.iter().map(|p| p.name()).collect();
        assert_eq!(a, ["a1", "a2"]);
    }

    #[test]
    fn categories_are_case_sensitive() {
        let products = vec![product("x", "Bebida"), product("y", "bebida")];
        let groups = CategoryGroups::from_products(&products);
        assert_eq!(groups.len(), 2);
        assert!(groups.get("BEBIDA").is_none());
    }

    #[test]
    fn empty_input_has_no_groups() {
        let groups = CategoryGroups::from_products(&[]);
        assert!(groups.is_empty());
    }
}
