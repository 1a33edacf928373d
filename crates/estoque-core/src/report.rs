use std::fmt;

use estoque_parser::{by_expiry, by_price_then_name, Product};
use tracing::debug;

use crate::grouping::CategoryGroups;
use crate::stats::{total_inventory_value, PriceStats};

/// Everything derived from one loaded product list.
#[derive(Debug, Clone)]
pub struct InventoryReport<'a> {
    pub products: &'a [Product],
    pub stats: PriceStats<'a>,
    pub total_value: f64,
    pub by_price: Vec<&'a Product>,
    pub by_expiry: Vec<&'a Product>,
    pub categories: CategoryGroups<'a>,
}

impl<'a> InventoryReport<'a> {
    /// Returns `None` when there is nothing to report.
    pub fn build(products: &'a [Product]) -> Option<Self> {
        let stats = PriceStats::compute(products)?;
        let total_value = total_inventory_value(products);

        let report = Self {
            products,
            stats,
            total_value,
            by_price: sorted_by(products, by_price_then_name),
            by_expiry: sorted_by(products, by_expiry),
            categories: CategoryGroups::from_products(products),
        };
        debug!(
            count = stats.count,
            mean_price = stats.mean,
            total_value,
            categories = report.categories.len(),
            "Built inventory report"
        );
        Some(report)
    }
}

/// Stable sort of borrowed products with an arbitrary comparator.
pub fn sorted_by<'a, F>(products: &'a [Product], compare: F) -> Vec<&'a Product>
where
    F: Fn(&Product, &Product) -> std::cmp::Ordering,
{
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}

pub struct Currency(pub f64);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R${:.2}", self.0)
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "=== {title} ===")
}

fn list<'p>(
    f: &mut fmt::Formatter<'_>,
    products: impl IntoIterator<Item = &'p Product>,
) -> fmt::Result {
    for product in products {
        writeln!(f, "{product}")?;
    }
    Ok(())
}

impl fmt::Display for InventoryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.stats;

        section(f, "Lista de Produtos (original)")?;
        list(f, self.products)?;

        section(f, "Estatísticas de Preço")?;
        writeln!(f, "Quantidade: {}", stats.count)?;
        writeln!(
            f,
            "Média: {} | Mín: {} | Máx: {}",
            Currency(stats.mean),
            Currency(stats.min),
            Currency(stats.max)
        )?;
        writeln!(
            f,
            "Mais caro: {} ({})",
            stats.most_expensive.name(),
            Currency(stats.most_expensive.price())
        )?;
        writeln!(
            f,
            "Mais barato: {} ({})",
            stats.cheapest.name(),
            Currency(stats.cheapest.price())
        )?;

        section(f, "Valor Total em Estoque")?;
        writeln!(f, "{}", Currency(self.total_value))?;

        section(f, "Ordenado por Preço")?;
        list(f, self.by_price.iter().copied())?;

        section(f, "Ordenado por Validade")?;
        list(f, self.by_expiry.iter().copied())?;

        section(f, "Agrupado por Categoria")?;
        for group in self.categories.iter() {
            writeln!(f, "- {} ({} itens)", group.category, group.products.len())?;
            for product in &group.products {
                writeln!(f, "  • {product}")?;
            }
        }

        Ok(())
    }
}
