#![allow(unused)]

use sectioned::{
    config::Theme,
    data,
    model::{Item, Model, Section, SectionListModel},
};

/// Creates a model over the built-in catalogue with a viewport of
/// `viewport_height` lines.
///
/// Rows (height in lines):
/// 0  ∨Mac (8)             1
/// 1-7  MacBook .. OS X    2 each
/// 8    Accessories        1
/// 9  ∨iPad (4)            1
/// 10-12 iPad Pro ..       2 each
/// 13   Accessories        1
/// 14 ∨iPhone (4)          1
/// 15-17 iPhone 6s ..      2 each
/// 18   Accessories        1
pub fn create_test_model(viewport_height: usize) -> Model {
    create_model_from_sections(data::sections(), viewport_height)
}

pub fn create_model_from_sections(sections: Vec<Section>, viewport_height: usize) -> Model {
    let mut model = Model::new(SectionListModel::new(sections), Theme::default()).unwrap();
    model.ui_model.viewport_height = viewport_height;
    model
}

/// `count` sections named "S0".. each holding `items` one-line items.
pub fn create_flat_sections(count: usize, items: usize) -> Vec<Section> {
    (0..count)
        .map(|s| {
            Section::new(
                format!("S{}", s),
                (0..items).map(|i| Item::new(format!("item {}", i), "")).collect(),
            )
        })
        .collect()
}
