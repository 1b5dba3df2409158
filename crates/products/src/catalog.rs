//! Ordered product list.
//!
//! The list is kept ascending by price. Equal prices keep insertion order, so a
//! newly registered product lands after every existing product of the same price.

use serde::Serialize;

use crate::product::Product;

/// Shown instead of the table while nothing has been registered.
pub const EMPTY_LIST_MESSAGE: &str = "No products registered yet.";

/// Return a new list holding `current` plus `new_product`, stable-sorted by price.
///
/// Total over its input: `current` need not be sorted, and the result always is.
pub fn insert_sorted(current: &[Product], new_product: Product) -> Vec<Product> {
    let mut next = Vec::with_capacity(current.len() + 1);
    next.extend_from_slice(current);
    next.push(new_product);
    // `sort_by_key` is stable.
    next.sort_by_key(Product::value);
    next
}

/// Snapshot of registered products, ascending by price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductList(Vec<Product>);

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new snapshot with `product` inserted in price order.
    pub fn with(&self, product: Product) -> Self {
        Self(insert_sorted(&self.0, product))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.0
    }

    /// Table rows: product name and formatted price.
    pub fn rows(&self) -> Vec<ProductRow> {
        self.0.iter().map(ProductRow::from).collect()
    }
}

impl<'a> IntoIterator for &'a ProductList {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One displayed row of the product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub name: String,
    pub price: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            price: product.value().to_brl(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProductSubmission, validate};

    fn product(name: &str, value: &str) -> Product {
        validate(&ProductSubmission::new(name, "test product", value)).unwrap()
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(Product::name).collect()
    }

    #[test]
    fn insert_into_empty_list() {
        let list = insert_sorted(&[], product("a", "5"));
        assert_eq!(names(&list), vec!["a"]);
    }

    #[test]
    fn inserts_between_lower_and_higher_prices() {
        let current = vec![product("five", "5"), product("ten", "10")];
        let list = insert_sorted(&current, product("seven", "7"));
        assert_eq!(names(&list), vec!["five", "seven", "ten"]);
    }

    #[test]
    fn equal_prices_keep_insertion_order() {
        let current = vec![product("first", "3")];
        let list = insert_sorted(&current, product("second", "3,00"));
        assert_eq!(names(&list), vec!["first", "second"]);

        let list = insert_sorted(&list, product("third", "3.0"));
        assert_eq!(names(&list), vec!["first", "second", "third"]);
    }

    #[test]
    fn does_not_modify_the_input() {
        let current = vec![product("ten", "10")];
        let _ = insert_sorted(&current, product("one", "1"));
        assert_eq!(names(&current), vec!["ten"]);
    }

    #[test]
    fn unsorted_input_comes_back_sorted() {
        let current = vec![product("ten", "10"), product("two", "2")];
        let list = insert_sorted(&current, product("five", "5"));
        assert_eq!(names(&list), vec!["two", "five", "ten"]);
    }

    #[test]
    fn product_list_snapshots_are_independent() {
        let empty = ProductList::new();
        let one = empty.with(product("b", "2"));
        let two = one.with(product("a", "1"));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(names(two.as_slice()), vec!["a", "b"]);
    }

    #[test]
    fn rows_show_name_and_brl_price() {
        let list = ProductList::new()
            .with(product("Lamp", "1234,5"))
            .with(product("Pen", "2"));

        assert_eq!(
            list.rows(),
            vec![
                ProductRow {
                    name: "Pen".to_string(),
                    price: "R$ 2,00".to_string(),
                },
                ProductRow {
                    name: "Lamp".to_string(),
                    price: "R$ 1.234,50".to_string(),
                },
            ]
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: repeated insertion always yields a non-decreasing list.
            #[test]
            fn repeated_insertion_stays_sorted(values in prop::collection::vec(0u64..500, 0..40)) {
                let mut list: Vec<Product> = Vec::new();
                for v in &values {
                    list = insert_sorted(&list, product("p", &v.to_string()));
                }

                prop_assert_eq!(list.len(), values.len());
                prop_assert!(list.windows(2).all(|w| w[0].value() <= w[1].value()));
            }

            /// Property: products with equal prices appear in insertion order.
            #[test]
            fn insertion_is_stable(values in prop::collection::vec(0u64..5, 1..30)) {
                let mut list: Vec<Product> = Vec::new();
                for (i, v) in values.iter().enumerate() {
                    list = insert_sorted(&list, product(&i.to_string(), &v.to_string()));
                }

                for w in list.windows(2) {
                    if w[0].value() == w[1].value() {
                        let a: usize = w[0].name().parse().unwrap();
                        let b: usize = w[1].name().parse().unwrap();
                        prop_assert!(a < b);
                    }
                }
            }
        }
    }
}
