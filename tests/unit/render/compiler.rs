//! Tests for pattern to draw-program compilation

#[cfg(test)]
mod tests {
    use gamutile::TileError;
    use gamutile::combinatorics::necklace::{Pattern, generate_combinations, parse_alphabet};
    use gamutile::render::compiler::{
        DrawOp, arc_count, compile, compile_back, compile_fills, compile_topology, line_count,
        net_rotation,
    };
    use gamutile::render::palette::{BLUE, BackFace, GREY, LabelStyle, Palette, RED};
    use image::Rgba;

    const GREEN: Rgba<u8> = Rgba([0, 160, 0, 255]);

    fn primaries() -> Palette {
        Palette::new(BackFace {
            ground: GREY,
            cycle: vec![RED, BLUE],
        })
        .with('A', LabelStyle::new(RED, 0))
        .with('B', LabelStyle::new(BLUE, 0))
        .with('C', LabelStyle::new(GREEN, 0))
    }

    fn topology(text: &str, palette: &Palette) -> Vec<DrawOp> {
        compile_topology(&text.parse::<Pattern>().unwrap(), palette).unwrap()
    }

    // Tests three distinct labels are separated by three arcs
    // Verified by dropping the final arc
    #[test]
    fn test_all_distinct_uses_three_arcs() {
        let ops = topology("ABC", &primaries());

        assert_eq!(arc_count(&ops), 3);
        assert_eq!(line_count(&ops), 0);
        assert_eq!(net_rotation(&ops), 0);
    }

    // Tests a leading pair is merged by an arc and split off by a chord
    // Verified by swapping the branch conditions
    #[test]
    fn test_leading_pair_uses_line() {
        let ops = topology("AAB", &primaries());

        assert_eq!(
            ops,
            vec![
                DrawOp::Spin(60),
                DrawOp::Arc(0),
                DrawOp::Spin(-60),
                DrawOp::Line(0),
                DrawOp::Spin(-120),
                DrawOp::Arc(0),
                DrawOp::Spin(120),
            ]
        );
        assert_eq!(net_rotation(&ops), 0);
    }

    // Tests a trailing pair is drawn from the odd edge
    // Verified by omitting the closing spin
    #[test]
    fn test_trailing_pair_uses_line() {
        let ops = topology("ABB", &primaries());

        assert_eq!(arc_count(&ops), 2);
        assert_eq!(line_count(&ops), 1);
        assert_eq!(net_rotation(&ops), 0);
        assert_eq!(ops.first(), Some(&DrawOp::Arc(0)));
    }

    // Tests a uniform tile only rounds its three vertices
    // Verified by drawing a chord for uniform tiles
    #[test]
    fn test_uniform_has_no_line() {
        let ops = topology("AAA", &primaries());

        assert_eq!(arc_count(&ops), 3);
        assert_eq!(line_count(&ops), 0);
        assert_eq!(net_rotation(&ops), 0);
    }

    // Tests every program of the full alphabet returns to its start heading
    // Verified by changing the uniform branch's last spin
    #[test]
    fn test_every_topology_restores_heading() {
        let palette = Palette::gamut();
        for pattern in generate_combinations(&parse_alphabet("AaeBbc")) {
            let ops = compile_topology(&pattern, &palette).unwrap();
            assert_eq!(net_rotation(&ops), 0, "pattern {pattern}");
            assert_eq!(net_rotation(&compile(&pattern, &palette).unwrap()), 0);
        }
    }

    // Tests ring levels flow from labels into arc and line sizes
    // Verified by always drawing level zero
    #[test]
    fn test_sizes_follow_labels() {
        let palette = Palette::gamut();

        let distinct = topology("Aab", &palette);
        let arcs: Vec<DrawOp> = distinct
            .into_iter()
            .filter(|op| matches!(op, DrawOp::Arc(_)))
            .collect();
        assert_eq!(arcs, vec![DrawOp::Arc(0), DrawOp::Arc(-1), DrawOp::Arc(-1)]);

        let paired = topology("aaB", &palette);
        assert!(paired.contains(&DrawOp::Arc(1)));
        assert!(paired.contains(&DrawOp::Line(-1)));
        assert!(paired.contains(&DrawOp::Arc(0)));
    }

    // Tests fills visit the edges in pattern order a third of a turn apart
    // Verified by filling in reverse order
    #[test]
    fn test_fills_in_pattern_order() {
        let pattern: Pattern = "ABC".parse().unwrap();
        let fills = compile_fills(&pattern, &primaries()).unwrap();

        assert_eq!(
            fills,
            vec![
                DrawOp::Fill(RED),
                DrawOp::Spin(120),
                DrawOp::Fill(BLUE),
                DrawOp::Spin(120),
                DrawOp::Fill(GREEN),
                DrawOp::Spin(120),
            ]
        );
    }

    // Tests a full program is topology followed by fills
    // Verified by placing fills first
    #[test]
    fn test_compile_concatenates_phases() {
        let pattern: Pattern = "ABB".parse().unwrap();
        let palette = primaries();
        let mut expected = compile_topology(&pattern, &palette).unwrap();
        expected.extend(compile_fills(&pattern, &palette).unwrap());

        assert_eq!(compile(&pattern, &palette).unwrap(), expected);
    }

    // Tests labels missing from the palette are rejected
    // Verified by skipping unknown labels
    #[test]
    fn test_unknown_label_fails() {
        let pattern: Pattern = "ABZ".parse().unwrap();
        assert!(matches!(
            compile(&pattern, &primaries()),
            Err(TileError::InvalidPattern { .. })
        ));
    }

    // Tests the back grounds the face then colours six corners alternately
    // Verified by using the ground colour for every corner
    #[test]
    fn test_back_program() {
        let ops = compile_back(&Palette::gamut());
        let fills: Vec<Rgba<u8>> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill(color) => Some(*color),
                _ => None,
            })
            .collect();

        assert_eq!(ops.first(), Some(&DrawOp::Fill(GREY)));
        assert_eq!(arc_count(&ops), 6);
        assert_eq!(fills, vec![GREY, RED, BLUE, RED, BLUE, RED, BLUE]);
        assert_eq!(net_rotation(&ops), 0);
    }

    // Tests an empty corner cycle falls back to the ground colour
    // Verified by skipping corner fills when the cycle is empty
    #[test]
    fn test_back_without_cycle() {
        let palette = Palette::new(BackFace {
            ground: GREEN,
            cycle: Vec::new(),
        });
        let ops = compile_back(&palette);

        assert!(ops
            .iter()
            .all(|op| !matches!(op, DrawOp::Fill(color) if *color != GREEN)));
        assert_eq!(ops.len(), 19);
    }
}
