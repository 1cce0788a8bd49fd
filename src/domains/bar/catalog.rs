//! The in-memory item catalog served by `GET /bar`.
//!
//! Read-only and built at compile time; categories are listed in the order
//! they are advertised to clients.

use serde::Serialize;

/// A catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: &'static str,
    pub price: f64,
}

/// A named group of items.
#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub items: &'static [CatalogItem],
}

const fn item(id: u32, name: &'static str, price: f64) -> CatalogItem {
    CatalogItem { id, name, price }
}

static CATALOG: &[Category] = &[
    Category {
        name: "electronics",
        items: &[
            item(1, "Laptop", 999.99),
            item(2, "Smartphone", 699.99),
            item(3, "Headphones", 199.99),
            item(4, "Tablet", 349.99),
            item(5, "Smartwatch", 249.99),
        ],
    },
    Category {
        name: "books",
        items: &[
            item(1, "The Great Gatsby", 12.99),
            item(2, "1984", 10.99),
            item(3, "To Kill a Mockingbird", 14.99),
            item(4, "The Hobbit", 16.99),
            item(5, "Harry Potter", 19.99),
        ],
    },
    Category {
        name: "clothing",
        items: &[
            item(1, "T-Shirt", 19.99),
            item(2, "Jeans", 39.99),
            item(3, "Sweater", 49.99),
            item(4, "Jacket", 79.99),
            item(5, "Socks", 9.99),
        ],
    },
];

/// Find a category by exact name.
pub fn find_category(name: &str) -> Option<&'static Category> {
    CATALOG.iter().find(|category| category.name == name)
}

/// Names of all categories.
pub fn category_names() -> Vec<&'static str> {
    CATALOG.iter().map(|category| category.name).collect()
}
