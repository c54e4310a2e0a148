use crate::model::{Item, Section, SectionListModel};

/// The compiled-in product catalogue shown at start-up.
pub fn sections() -> Vec<Section> {
    vec![
        Section::new(
            "Mac",
            vec![
                Item::new(
                    "MacBook",
                    "Apple's ultraportable laptop, trading portability for speed and connectivity.",
                ),
                Item::new(
                    "MacBook Air",
                    "While the screen could be sharper, the updated 11-inch MacBook Air is a very light ultraportable that offers great performance and battery life for the price.",
                ),
                Item::new(
                    "MacBook Pro",
                    "Retina Display The brightest, most colorful Mac notebook display ever. The display in the MacBook Pro is the best ever in a Mac notebook.",
                ),
                Item::new(
                    "iMac",
                    "iMac combines enhanced performance with our best ever Retina display for the ultimate desktop experience in two sizes.",
                ),
                Item::new(
                    "Mac Pro",
                    "Mac Pro is equipped with pro-level graphics, storage, expansion options and memory.",
                ),
                Item::new(
                    "Mac mini",
                    "Mac mini is an affordable powerhouse that packs the entire Mac experience into a 7.7-inch-square frame.",
                ),
                Item::new(
                    "OS X El Capitan",
                    "The twelfth major release of OS X (now named macOS).",
                ),
                Item::new("Accessories", ""),
            ],
        ),
        Section::new(
            "iPad",
            vec![
                Item::new(
                    "iPad Pro",
                    "iPad Pro delivers epic power, in 12.9-inch and a new 10.5-inch size.",
                ),
                Item::new(
                    "iPad Air 2",
                    "The second-generation iPad Air tablet computer designed, developed, and marketed by Apple Inc.",
                ),
                Item::new(
                    "iPad mini 4",
                    "iPad mini 4 puts uncompromising performance and potential in your hand.",
                ),
                Item::new("Accessories", ""),
            ],
        ),
        Section::new(
            "iPhone",
            vec![
                Item::new(
                    "iPhone 6s",
                    "The iPhone 6S has a similar design to the 6 but updated hardware, including a strengthened chassis and upgraded system-on-chip, a 12-megapixel camera, improved fingerprint recognition sensor, and LTE Advanced support.",
                ),
                Item::new(
                    "iPhone 6",
                    "The iPhone 6 and iPhone 6 Plus are smartphones designed and marketed by Apple Inc.",
                ),
                Item::new(
                    "iPhone SE",
                    "The iPhone SE was received positively by critics, who noted its familiar form factor and design, improved hardware over previous 4-inch iPhone models, as well as its overall performance and battery life.",
                ),
                Item::new("Accessories", ""),
            ],
        ),
    ]
}

/// A [`SectionListModel`] over [`sections`], every section expanded.
pub fn default_model() -> SectionListModel {
    SectionListModel::new(sections())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        let model = default_model();
        assert_eq!(model.section_count(), 3);
        assert_eq!(model.section_name(0), Ok("Mac"));
        assert_eq!(model.section_name(1), Ok("iPad"));
        assert_eq!(model.section_name(2), Ok("iPhone"));
        assert_eq!(model.row_count(0), Ok(8));
        assert_eq!(model.row_count(1), Ok(4));
        assert_eq!(model.row_count(2), Ok(4));
    }

    #[test]
    fn test_every_section_ends_with_accessories() {
        for section in sections() {
            let last = section.items().last().unwrap();
            assert_eq!(last.name, "Accessories");
            assert!(last.detail.is_empty());
        }
    }
}
