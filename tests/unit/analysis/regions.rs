//! Tests for colour census and connected-region labelling

#[cfg(test)]
mod tests {
    use gamutile::analysis::regions::{ColorCensus, Region, RegionMap, TileSummary};
    use gamutile::combinatorics::necklace::Pattern;
    use gamutile::render::palette::{BLUE, BackFace, GREY, INK, LabelStyle, Palette, RED};
    use gamutile::tileset::builder::{RenderConfig, RenderedTile, TileSetBuilder};
    use image::{Rgba, RgbaImage};

    const GREEN: Rgba<u8> = Rgba([0, 160, 0, 255]);

    fn render(text: &str) -> RenderedTile {
        let palette = Palette::new(BackFace {
            ground: GREY,
            cycle: vec![RED, BLUE],
        })
        .with('A', LabelStyle::new(RED, 0))
        .with('B', LabelStyle::new(BLUE, 0))
        .with('C', LabelStyle::new(GREEN, 0));
        let config = RenderConfig {
            tile_size: 200,
            supersample: 1,
            rotation_degrees: 0,
            prefix: "t".to_string(),
        };
        let builder = TileSetBuilder::new(palette, config).unwrap();
        builder.render_pattern(&text.parse::<Pattern>().unwrap()).unwrap()
    }

    fn stripes() -> RgbaImage {
        let mut image = RgbaImage::from_pixel(3, 2, RED);
        image.put_pixel(1, 0, BLUE);
        image.put_pixel(1, 1, BLUE);
        image
    }

    // Tests pixel counts and shares per colour
    // Verified by counting only the first row
    #[test]
    fn test_census_counts() {
        let census = ColorCensus::from_image(&stripes());

        assert_eq!(census.total(), 6);
        assert_eq!(census.count(RED), 4);
        assert_eq!(census.count(BLUE), 2);
        assert_eq!(census.count(GREEN), 0);
        assert!((census.share(BLUE) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(census.distinct(), 2);
        assert_eq!(census.colors().collect::<Vec<_>>(), vec![BLUE, RED]);
    }

    // Tests an empty census reports no coverage
    // Verified by dividing by a zero total
    #[test]
    fn test_census_empty() {
        let census = ColorCensus::default();
        assert!(census.share(RED).abs() < f64::EPSILON);
        assert_eq!(census.total(), 0);
    }

    // Tests same-coloured pixels split by another colour form separate regions
    // Verified by labelling with 8-connectivity
    #[test]
    fn test_region_map_splits_by_colour() {
        let regions = RegionMap::from_image(&stripes());

        assert_eq!(regions.regions().len(), 3);
        assert_eq!(regions.region_count(RED), 2);
        assert_eq!(
            regions.region_at(1, 1),
            Some(&Region {
                color: BLUE,
                area: 2
            })
        );
        assert_eq!(regions.region_at(3, 0), None);
        assert_eq!(regions.regions_of(RED).map(|r| r.area).sum::<usize>(), 4);
    }

    // Tests diagonal neighbours do not join a region
    // Verified by adding diagonal neighbours
    #[test]
    fn test_region_map_ignores_diagonals() {
        let mut image = RgbaImage::from_pixel(2, 2, BLUE);
        image.put_pixel(0, 0, RED);
        image.put_pixel(1, 1, RED);

        let regions = RegionMap::from_image(&image);
        assert_eq!(regions.region_count(RED), 2);
        assert_eq!(regions.region_count(BLUE), 2);
    }

    // Tests three distinct labels produce three equal regions
    // Verified by dropping the last arc
    #[test]
    fn test_distinct_labels_give_equal_regions() {
        let tile = render("ABC");
        let regions = RegionMap::from_image(&tile.image);
        let census = ColorCensus::from_image(&tile.image);

        for color in [RED, BLUE, GREEN] {
            assert_eq!(regions.region_count(color), 1);
        }
        let areas = [census.count(RED), census.count(BLUE), census.count(GREEN)];
        let largest = areas.iter().copied().max().unwrap_or(0);
        let smallest = areas.iter().copied().min().unwrap_or(0);
        assert!(smallest > 2000, "areas {areas:?}");
        assert!(largest - smallest < largest / 20, "areas {areas:?}");
    }

    // Tests paired labels merge into one region
    // Verified by arcing the pair's shared vertex at full size
    #[test]
    fn test_paired_labels_merge() {
        for text in ["AAB", "ABB"] {
            let tile = render(text);
            let regions = RegionMap::from_image(&tile.image);
            let census = ColorCensus::from_image(&tile.image);
            let (pair, single) = if text == "AAB" {
                (RED, BLUE)
            } else {
                (BLUE, RED)
            };

            assert_eq!(regions.region_count(pair), 1, "pattern {text}");
            assert_eq!(regions.region_count(single), 1, "pattern {text}");
            assert!(census.count(pair) > 3 * census.count(single));
        }
    }

    // Tests a uniform tile is one region of one colour
    // Verified by filling only the first edge
    #[test]
    fn test_uniform_tile_single_region() {
        let tile = render("AAA");
        let regions = RegionMap::from_image(&tile.image);

        assert_eq!(regions.region_count(RED), 1);
        assert_eq!(regions.region_count(BLUE), 0);
        assert!(ColorCensus::from_image(&tile.image).count(INK) > 0);
    }

    // Tests summaries list only the colours present
    // Verified by listing absent colours at zero
    #[test]
    fn test_tile_summary() {
        let tile = render("AAB");
        let summary = TileSummary::of(&tile, &[RED, BLUE, GREEN]);

        assert_eq!(summary.name, "t-AAB");
        assert_eq!(summary.fills.len(), 2);

        let text = summary.to_string();
        assert!(text.starts_with("t-AAB:"));
        assert!(text.contains("#ff0000"));
        assert!(text.contains("#0000ff"));
        assert!(text.contains("in 1 region"));
        assert!(!text.contains("#00a000"));
    }
}
