#[cfg(test)]
mod tests {
    use std::path::Path;

    use itertools::Itertools;
    use polynest::entities::{Layout, Part, Sheet};
    use polynest::geometry::geo_traits::Shape;
    use polynest::geometry::primitives::{Point, Rect, SPolygon};
    use polynest::io::export::export_layout;
    use polynest::io::import::{Instance, import_instance};
    use polynest::nfp::NfpKind;
    use rhc::config::NestingConfig;
    use rhc::{Nester, Termination, io, nest};
    use test_case::test_case;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn load(path: &str) -> Instance {
        let ext_instance = io::read_instance(Path::new(path)).unwrap();
        import_instance(&ext_instance).unwrap()
    }

    fn seeded_config(seed: u64) -> NestingConfig {
        NestingConfig {
            prng_seed: Some(seed),
            max_no_improvement: 3,
            max_rounds: Some(20),
            ..Default::default()
        }
    }

    fn assert_normalized(layout: &Layout) {
        let bbox = layout.bbox().unwrap();
        assert!(bbox.x_min.abs() < 1e-9 && bbox.y_min.abs() < 1e-9, "{bbox:?}");
    }

    #[test_case("../assets/two_squares.json"; "two_squares")]
    #[test_case("../assets/rect_and_square.json"; "rect_and_square")]
    #[test_case("../assets/brackets.json"; "brackets")]
    #[test_case("../assets/malformed.json"; "malformed")]
    fn test_instance(instance_path: &str) {
        init();
        let instance = load(instance_path);
        let n_parts = instance.parts.len();

        let solution = Nester::new(instance.parts, instance.sheet, seeded_config(0))
            .unwrap()
            .solve()
            .unwrap();
        let layout = &solution.layout;

        assert_eq!(layout.len() + layout.skipped.len(), n_parts);
        assert_eq!(layout.n_fallbacks(), 0);
        assert!(layout.is_overlap_free());
        assert_normalized(layout);
        assert!(solution.n_rounds >= 1);
        assert!(solution.score_history.windows(2).all(|w| w[1] <= w[0]));

        let total_area: f64 = layout.shapes().map(|s| s.area()).sum();
        assert!(layout.bbox_area() >= total_area - 1e-6);

        let ext_solution = export_layout(layout);
        assert_eq!(ext_solution.placements.len(), layout.len());
        assert!(ext_solution.placements.iter().map(|p| &p.id).all_unique());
    }

    #[test]
    fn two_unit_squares_are_placed_side_by_side() {
        init();
        let instance = load("../assets/two_squares.json");
        let config = NestingConfig {
            max_no_improvement: 1,
            ..seeded_config(1)
        };
        let layout = nest(&instance.parts, instance.sheet, &config).unwrap();
        assert_eq!(layout.len(), 2);
        assert!((layout.bbox_area() - 2.0).abs() < 1e-9);
        assert!(layout.is_overlap_free());
    }

    #[test]
    fn rectangle_and_square_form_a_strip() {
        init();
        let instance = load("../assets/rect_and_square.json");
        let config = NestingConfig {
            max_no_improvement: 1,
            ..seeded_config(2)
        };
        let layout = nest(&instance.parts, instance.sheet, &config).unwrap();
        assert!((layout.bbox_area() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn single_part_lands_on_the_origin() {
        init();
        let triangle = SPolygon::new(vec![Point(5.0, 5.0), Point(7.0, 5.0), Point(5.0, 7.0)]).unwrap();
        let parts = vec![Part::new("t", triangle)];
        let layout = nest(&parts, Sheet::new(10.0, 10.0).unwrap(), &seeded_config(0)).unwrap();

        assert_eq!(layout.len(), 1);
        assert_eq!(layout.placements[0].shape.bbox(), Rect::try_new(0.0, 0.0, 2.0, 2.0).unwrap());
        assert_eq!(layout.placements[0].d_transf.rotation(), 0.0);
        assert_eq!(layout.placements[0].d_transf.translation(), (-5.0, -5.0));
    }

    #[test]
    fn empty_input_yields_empty_layout() {
        init();
        let layout = nest(&[], Sheet::new(1.0, 1.0).unwrap(), &NestingConfig::default()).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.bbox_area(), 0.0);
    }

    #[test]
    fn seeded_runs_are_deterministic() {
        init();
        let instance = load("../assets/brackets.json");
        let run = |parallel_candidates: bool| {
            let config = NestingConfig {
                parallel_candidates,
                ..seeded_config(42)
            };
            let solution = Nester::new(instance.parts.clone(), instance.sheet, config)
                .unwrap()
                .solve()
                .unwrap();
            (export_layout(&solution.layout).placements, solution.n_rounds)
        };
        let first = run(false);
        assert_eq!(first, run(false));
        assert_eq!(first, run(true));
    }

    #[test]
    fn spacing_keeps_parts_apart() {
        init();
        let instance = load("../assets/two_squares.json");
        let config = NestingConfig {
            spacing: 0.5,
            max_no_improvement: 1,
            ..seeded_config(3)
        };
        let layout = nest(&instance.parts, instance.sheet, &config).unwrap();
        //each buffered square spans 2x2
        assert!(layout.bbox_area() >= 8.0 - 1e-6);
        assert!(layout.is_overlap_free());
    }

    #[test]
    fn difference_strategy_completes_with_fallbacks_flagged() {
        init();
        let instance = load("../assets/brackets.json");
        let config = NestingConfig {
            nfp_strategy: NfpKind::Difference,
            ..seeded_config(7)
        };
        let solution = Nester::new(instance.parts.clone(), instance.sheet, config)
            .unwrap()
            .solve()
            .unwrap();
        assert_eq!(solution.layout.len(), instance.parts.len());
        assert!(matches!(
            solution.termination,
            Termination::Converged | Termination::RoundLimit
        ));
        let non_fallback = solution
            .layout
            .placements
            .iter()
            .filter(|p| !p.fallback)
            .collect_vec();
        for (a, b) in non_fallback.iter().tuple_combinations() {
            assert!(!polynest::geometry::kernel::overlaps(&a.shape, &b.shape));
        }
    }
}
