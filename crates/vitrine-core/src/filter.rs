//! Category filtering
//!
//! Pure functions evaluated synchronously whenever the active category
//! changes. Order is always preserved; nothing is re-sorted.

use crate::catalogue::{CategoryId, Product};

/// One rendered position in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    Product(&'a Product),
    /// Trailing "coming soon" card
    Placeholder,
}

impl<'a> Slot<'a> {
    pub fn product(self) -> Option<&'a Product> {
        match self {
            Slot::Product(product) => Some(product),
            Slot::Placeholder => None,
        }
    }
}

/// Products visible under `active`.
///
/// - `future`: nothing
/// - `all`: every product
/// - anything else: products whose category equals `active`
pub fn filter<'a>(products: &'a [Product], active: &CategoryId) -> Vec<&'a Product> {
    if active.is_future() {
        Vec::new()
    } else if active.is_all() {
        products.iter().collect()
    } else {
        products.iter().filter(|p| &p.category == active).collect()
    }
}

/// Whether a placeholder slot follows the real items
pub fn shows_placeholder_slot(active: &CategoryId) -> bool {
    active.is_reserved()
}

/// Filtered products followed by the placeholder slot when it is shown
pub fn visible_slots<'a>(products: &'a [Product], active: &CategoryId) -> Vec<Slot<'a>> {
    let mut slots: Vec<Slot<'a>> = filter(products, active)
        .into_iter()
        .map(Slot::Product)
        .collect();
    if shows_placeholder_slot(active) {
        slots.push(Slot::Placeholder);
    }
    slots
}

/// Number of rendered slots (filtered products plus the placeholder, if shown)
pub fn total_slots(products: &[Product], active: &CategoryId) -> usize {
    filter(products, active).len() + usize::from(shows_placeholder_slot(active))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{CraftParams, ProductId};
    use crate::media::MediaRef;

    fn product(id: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            archive_id: format!("NO.{id}"),
            code_name: id.to_uppercase(),
            title: String::new(),
            category: CategoryId::new(category),
            tags: vec![],
            media: MediaRef::new(format!("{id}.jpg")),
            craft: CraftParams::default(),
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn abbcc() -> Vec<Product> {
        vec![
            product("p1", "a"),
            product("p2", "a"),
            product("p3", "b"),
            product("p4", "b"),
            product("p5", "c"),
        ]
    }

    #[test]
    fn test_concrete_category_keeps_matching_in_order() {
        let products = abbcc();
        assert_eq!(ids(&filter(&products, &"a".into())), ["p1", "p2"]);
        assert_eq!(ids(&filter(&products, &"b".into())), ["p3", "p4"]);
        assert_eq!(ids(&filter(&products, &"c".into())), ["p5"]);
    }

    #[test]
    fn test_interleaved_categories_stay_stable() {
        let products = vec![
            product("x1", "b"),
            product("x2", "a"),
            product("x3", "b"),
            product("x4", "a"),
        ];
        assert_eq!(ids(&filter(&products, &"b".into())), ["x1", "x3"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let products = abbcc();
        assert!(filter(&products, &"zzz".into()).is_empty());
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let products = abbcc();
        assert_eq!(
            ids(&filter(&products, &CategoryId::all())),
            ["p1", "p2", "p3", "p4", "p5"]
        );
    }

    #[test]
    fn test_future_returns_nothing() {
        let products = abbcc();
        assert!(filter(&products, &CategoryId::future()).is_empty());
    }

    #[test]
    fn test_placeholder_slot_only_for_reserved_ids() {
        assert!(shows_placeholder_slot(&CategoryId::all()));
        assert!(shows_placeholder_slot(&CategoryId::future()));
        for id in ["a", "b", "c", "shaker"] {
            assert!(!shows_placeholder_slot(&id.into()), "{id}");
        }
    }

    #[test]
    fn test_five_products_category_b_has_two_slots() {
        let products = abbcc();
        let slots = visible_slots(&products, &"b".into());
        assert_eq!(slots.len(), 2);
        assert!(!slots.contains(&Slot::Placeholder));
        assert_eq!(total_slots(&products, &"b".into()), 2);
    }

    #[test]
    fn test_single_product_under_all_has_placeholder() {
        let products = vec![product("solo", "a")];
        let slots = visible_slots(&products, &CategoryId::all());
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1], Slot::Placeholder);
        assert_eq!(slots[0].product().map(|p| p.id.as_str()), Some("solo"));
        assert_eq!(total_slots(&products, &CategoryId::all()), 2);
    }

    #[test]
    fn test_future_has_only_placeholder() {
        let products = abbcc();
        assert_eq!(
            visible_slots(&products, &CategoryId::future()),
            vec![Slot::Placeholder]
        );
    }
}
