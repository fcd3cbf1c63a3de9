//! Tests for edge label styling and back face colours

#[cfg(test)]
mod tests {
    use gamutile::TileError;
    use gamutile::combinatorics::necklace::EdgeLabel;
    use gamutile::render::palette::{BLUE, BackFace, GREY, LabelStyle, Palette, RED};
    use image::Rgba;

    // Tests the game palette pairs colours with nested ring levels
    // Verified by giving every label level zero
    #[test]
    fn test_gamut_styles() {
        let palette = Palette::gamut();

        assert_eq!(palette.style(EdgeLabel('A')).unwrap(), LabelStyle::new(RED, 0));
        assert_eq!(palette.style(EdgeLabel('a')).unwrap(), LabelStyle::new(RED, -1));
        assert_eq!(palette.style(EdgeLabel('e')).unwrap(), LabelStyle::new(RED, -2));
        assert_eq!(palette.style(EdgeLabel('B')).unwrap(), LabelStyle::new(BLUE, 0));
        assert_eq!(palette.style(EdgeLabel('c')).unwrap(), LabelStyle::new(BLUE, -2));
        assert_eq!(palette.style(EdgeLabel('x')).unwrap().color, GREY);
    }

    // Tests unknown labels are reported with the label
    // Verified by defaulting missing labels to level zero
    #[test]
    fn test_missing_label() {
        let error = Palette::gamut().style(EdgeLabel('Z')).unwrap_err();

        assert!(matches!(error, TileError::InvalidPattern { .. }));
        assert!(error.to_string().contains("'Z'"));
        assert!(!Palette::gamut().contains(EdgeLabel('Z')));
    }

    // Tests labels are listed in ascending order
    // Verified by listing in insertion order
    #[test]
    fn test_labels_sorted() {
        let labels: String = Palette::gamut().labels().map(|label| label.0).collect();
        assert_eq!(labels, "ABXabcexy");
    }

    // Tests inserting a label twice keeps the newer style
    // Verified by ignoring existing keys on insert
    #[test]
    fn test_with_replaces_style() {
        let green = Rgba([0, 200, 0, 255]);
        let palette = Palette::gamut().with('A', LabelStyle::new(green, 1));

        assert_eq!(palette.style(EdgeLabel('A')).unwrap(), LabelStyle::new(green, 1));
        assert_ne!(palette, Palette::gamut());
    }

    // Tests fill colours are deduplicated across labels and back face
    // Verified by listing one colour per label
    #[test]
    fn test_fill_colors_distinct() {
        assert_eq!(Palette::gamut().fill_colors(), vec![RED, BLUE, GREY]);

        let green = Rgba([0, 200, 0, 255]);
        let custom = Palette::new(BackFace {
            ground: green,
            cycle: vec![RED],
        })
        .with('Q', LabelStyle::new(BLUE, 0));
        assert_eq!(custom.fill_colors(), vec![BLUE, green, RED]);
    }

    // Tests the default palette is the game palette
    // Verified by defaulting to an empty palette
    #[test]
    fn test_default_is_gamut() {
        let palette = Palette::default();

        assert_eq!(palette, Palette::gamut());
        assert_eq!(palette.back().ground, GREY);
        assert_eq!(palette.back().cycle, vec![RED, BLUE]);
    }
}
