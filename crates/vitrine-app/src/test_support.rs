//! Shared fixtures for unit tests

use vitrine_core::{Catalogue, Category, CategoryId, CraftParams, MediaRef, Product, ProductId};

use crate::config::Settings;
use crate::state::AppState;

pub fn product(id: &str, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        archive_id: format!("NO.{id}"),
        code_name: id.to_uppercase(),
        title: format!("{id} title"),
        category: CategoryId::new(category),
        tags: vec!["one".into(), "two".into(), "three".into()],
        media: MediaRef::new(format!("media/{id}.jpg")),
        craft: CraftParams {
            techniques: vec!["resin pour".into(), "hand polish".into()],
            materials: None,
            size: None,
        },
    }
}

fn category(id: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        label: id.to_uppercase(),
    }
}

/// Five products in categories a, a, b, b, c; `p5` is motion media
pub fn catalogue_abbcc() -> Catalogue {
    let mut p5 = product("p5", "c");
    p5.media = MediaRef::new("media/p5.mp4");

    Catalogue::new(
        ["all", "a", "b", "c", "future"].map(category).to_vec(),
        vec![
            product("p1", "a"),
            product("p2", "a"),
            product("p3", "b"),
            product("p4", "b"),
            p5,
        ],
    )
    .expect("fixture catalogue is valid")
}

/// A single product under `all`
pub fn catalogue_single() -> Catalogue {
    Catalogue::new(
        ["all", "a", "future"].map(category).to_vec(),
        vec![product("solo", "a")],
    )
    .expect("fixture catalogue is valid")
}

/// Gallery state over [`catalogue_abbcc`] with default settings
pub fn test_state() -> AppState {
    AppState::new(catalogue_abbcc(), Settings::default())
}
