use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::CategoryIndex;
use crate::models::Product;

/// Heading shown over the grid when no category or query narrows the list.
pub const ALL_PRODUCTS_LABEL: &str = "Tüm Ürünler";

/// Caller intent for one filtering pass. The three cases are mutually
/// exclusive per call; surfaces that let a search query override a category
/// selection resolve that precedence in [`Selector::from_params`], before the
/// core ever sees the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every product, in input order.
    All,
    /// Products in the named category, expanded to its direct children.
    Category { name: String },
    /// Case-insensitive substring search over product name and category.
    Query { text: String },
}

impl Selector {
    /// Builds a selector the way the storefront surfaces do: a non-empty
    /// search query wins over any category selection, and an absent, blank,
    /// or literal `"all"` category means the whole catalog. The magic string
    /// stops here; the core only sees the tagged cases.
    pub fn from_params(category: Option<&str>, query: Option<&str>) -> Self {
        if let Some(text) = query.map(str::trim).filter(|t| !t.is_empty()) {
            return Selector::Query {
                text: text.to_string(),
            };
        }
        match category.map(str::trim) {
            Some(name) if !name.is_empty() && name != "all" => Selector::Category {
                name: name.to_string(),
            },
            _ => Selector::All,
        }
    }
}

/// The visible subset plus the display metadata the grid renders.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FilterOutcome {
    pub items: Vec<Product>,
    /// Grid heading: the category name, `Arama: "<text>"`, or the
    /// all-products marker.
    pub label: String,
    /// Length of `items`, counted after filtering.
    pub count: usize,
}

impl FilterOutcome {
    fn new(items: Vec<Product>, label: String) -> Self {
        let count = items.len();
        Self {
            items,
            label,
            count,
        }
    }

    /// The storefront's result-count line, e.g. `12 ürün listelendi`.
    pub fn summary(&self) -> String {
        format!("{} ürün listelendi", self.count)
    }
}

/// Computes the visible product subset for one selector.
///
/// A stable filter: output preserves the relative order of `products`, and
/// neither input is mutated. Selecting a parent category transparently
/// includes its direct children's products; selecting a child matches exactly
/// (only one nesting level is modeled, so there is no grandchild expansion).
/// A selector naming a category absent from the index degrades to
/// exact-literal matching rather than erroring or falling back to "all".
pub fn filter(products: &[Product], index: &CategoryIndex<'_>, selector: &Selector) -> FilterOutcome {
    match selector {
        Selector::Query { text } => {
            let needle = text.trim().to_lowercase();
            let items = products
                .iter()
                .filter(|p| {
                    p.name.to_lowercase().contains(&needle)
                        || p.category.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            FilterOutcome::new(items, format!("Arama: \"{text}\""))
        }
        Selector::Category { name } => {
            let children = index.child_names_of(name);
            let items = products
                .iter()
                .filter(|p| p.category == *name || children.contains(&p.category.as_str()))
                .cloned()
                .collect();
            FilterOutcome::new(items, name.clone())
        }
        Selector::All => FilterOutcome::new(products.to_vec(), ALL_PRODUCTS_LABEL.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::Utc;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;
    use uuid::Uuid;

    fn product(name: &str, category: &str) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.into(),
            price: dec!(10.00),
            image: "https://example.com/p.jpg".into(),
            description: None,
            category: category.into(),
            is_showcase: false,
            in_stock: true,
            created_at: Utc::now(),
        }
    }

    fn category(name: &str, parent_id: Option<Uuid>) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_id,
            order: 0,
        }
    }

    fn fixtures() -> (Vec<Product>, Vec<Category>) {
        let kirtasiye = category("Kırtasiye", None);
        let kalem = category("Kalem", Some(kirtasiye.id));
        let defter = category("Defter", None);
        let products = vec![
            product("Altın Kalem", "Kalem"),
            product("Okul Defteri", "Defter"),
            product("Kurşun Kalem", "Kalem"),
        ];
        (products, vec![kirtasiye, kalem, defter])
    }

    #[test]
    fn all_returns_everything_in_input_order() {
        let (products, categories) = fixtures();
        let index = CategoryIndex::build(&categories);
        let outcome = filter(&products, &index, &Selector::All);
        assert_eq!(outcome.items, products);
        assert_eq!(outcome.count, products.len());
        assert_eq!(outcome.label, ALL_PRODUCTS_LABEL);
    }

    #[test]
    fn parent_selection_expands_to_children() {
        let (products, categories) = fixtures();
        let index = CategoryIndex::build(&categories);
        let outcome = filter(
            &products,
            &index,
            &Selector::Category {
                name: "Kırtasiye".into(),
            },
        );
        assert_eq!(outcome.label, "Kırtasiye");
        assert_eq!(outcome.count, 2);
        assert!(outcome.items.iter().all(|p| p.category == "Kalem"));
    }

    #[test]
    fn child_selection_matches_exactly() {
        let (products, categories) = fixtures();
        let index = CategoryIndex::build(&categories);
        let outcome = filter(
            &products,
            &index,
            &Selector::Category {
                name: "Kalem".into(),
            },
        );
        assert_eq!(outcome.count, 2);
    }

    #[test]
    fn unknown_category_degrades_to_exact_literal_match() {
        let (mut products, categories) = fixtures();
        products.push(product("Gizemli Ürün", "Bilinmeyen"));
        let index = CategoryIndex::build(&categories);
        let outcome = filter(
            &products,
            &index,
            &Selector::Category {
                name: "Bilinmeyen".into(),
            },
        );
        // No error, no fallback to "all": just the literal string match.
        assert_eq!(outcome.count, 1);
        assert_eq!(outcome.items[0].name, "Gizemli Ürün");
    }

    #[test]
    fn query_is_case_insensitive_and_labelled_verbatim() {
        let (products, categories) = fixtures();
        let index = CategoryIndex::build(&categories);
        let outcome = filter(
            &products,
            &index,
            &Selector::Query {
                text: "KALEM".into(),
            },
        );
        assert_eq!(outcome.label, "Arama: \"KALEM\"");
        assert_eq!(outcome.count, 2);
        assert_eq!(outcome.items[0].name, "Altın Kalem");
    }

    #[test]
    fn query_matches_category_substring_too() {
        let (products, categories) = fixtures();
        let index = CategoryIndex::build(&categories);
        let outcome = filter(
            &products,
            &index,
            &Selector::Query {
                text: "defter".into(),
            },
        );
        assert_eq!(outcome.count, 1);
        assert_eq!(outcome.items[0].name, "Okul Defteri");
    }

    #[test]
    fn filter_is_idempotent_and_does_not_mutate_inputs() {
        let (products, categories) = fixtures();
        let before = products.clone();
        let index = CategoryIndex::build(&categories);
        let selector = Selector::Query {
            text: "kalem".into(),
        };
        let first = filter(&products, &index, &selector);
        let second = filter(&products, &index, &selector);
        assert_eq!(first, second);
        assert_eq!(products, before);
    }

    #[test]
    fn empty_products_always_yield_empty_outcome() {
        let (_, categories) = fixtures();
        let index = CategoryIndex::build(&categories);
        for selector in [
            Selector::All,
            Selector::Category {
                name: "Kalem".into(),
            },
            Selector::Query {
                text: "kalem".into(),
            },
        ] {
            let outcome = filter(&[], &index, &selector);
            assert!(outcome.items.is_empty());
            assert_eq!(outcome.count, 0);
        }
    }

    #[test]
    fn summary_counts_in_turkish() {
        let (products, categories) = fixtures();
        let index = CategoryIndex::build(&categories);
        let outcome = filter(&products, &index, &Selector::All);
        assert_eq!(outcome.summary(), "3 ürün listelendi");
    }

    #[test_case(None, None => Selector::All ; "no params")]
    #[test_case(Some("all"), None => Selector::All ; "literal all")]
    #[test_case(Some("  "), None => Selector::All ; "blank category")]
    #[test_case(Some("Kalem"), None => Selector::Category { name: "Kalem".into() } ; "category only")]
    #[test_case(Some("Kalem"), Some("defter") => Selector::Query { text: "defter".into() } ; "query overrides category")]
    #[test_case(Some("Kalem"), Some("   ") => Selector::Category { name: "Kalem".into() } ; "blank query falls through")]
    fn selector_precedence(category: Option<&str>, query: Option<&str>) -> Selector {
        Selector::from_params(category, query)
    }

    proptest! {
        #[test]
        fn filtered_items_are_an_ordered_subsequence(
            names in proptest::collection::vec("[a-zçğıöşü]{1,8}", 0..24),
            needle in "[a-zçğıöşü]{1,4}",
        ) {
            let products: Vec<Product> =
                names.iter().map(|n| product(n, "Kalem")).collect();
            let index = CategoryIndex::build(&[]);
            let outcome = filter(&products, &index, &Selector::Query { text: needle });

            // Every output item appears in the input, in the same relative order.
            let mut cursor = 0;
            for item in &outcome.items {
                let pos = products[cursor..]
                    .iter()
                    .position(|p| p.id == item.id)
                    .expect("filtered item must come from the input");
                cursor += pos + 1;
            }
            prop_assert_eq!(outcome.count, outcome.items.len());
        }

        #[test]
        fn unknown_names_never_have_children(name in "[A-Za-z]{1,12}") {
            let categories = [Category {
                id: Uuid::new_v4(),
                name: "Kırtasiye".into(),
                parent_id: None,
                order: 0,
            }];
            let index = CategoryIndex::build(&categories);
            prop_assume!(name != "Kırtasiye");
            prop_assert!(index.child_names_of(&name).is_empty());
        }
    }
}
