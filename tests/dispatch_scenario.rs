//! End-to-end dispatch scenarios over the public API.

use mostrar::cloud;
use mostrar::engines::knn;
use mostrar::prelude::*;

/// The KNN walkthrough scenario: k = 3, Euclidean, dark theme.
#[test]
fn knn_scene_has_expected_primitive_census() {
    let mut viz = Visualizer::new();
    let mut params = ParamsByModel::default();
    params.knn = KnnParams {
        k: 3,
        metric: Metric::Euclidean,
    };

    let scene = viz.render("knn", &params, Theme::Dark);

    assert_eq!(scene.point_count(), 40);
    assert_eq!(scene.line_count(), 3);

    // The search disk radius equals the 3rd-nearest distance plus 5.
    let expected_cloud = cloud::build(123, 40, 0.5);
    let ranked = knn::rank(&expected_cloud, Metric::Euclidean);
    let disks = scene.disks_with_class(StyleClass::SearchDisk);
    assert_eq!(disks.len(), 1);
    let (cx, cy, r) = disks[0];
    assert_eq!((cx, cy), (200.0, 150.0));
    assert_eq!(r, ranked[2].distance + 5.0);
}

#[test]
fn unknown_model_id_yields_placeholder_not_error() {
    let mut viz = Visualizer::new();
    let scene = viz.render("transformer", &ParamsByModel::default(), Theme::Dark);
    assert!(scene.is_empty());
}

#[test]
fn theme_changes_no_geometry() {
    let params = ParamsByModel::default();
    for id in ["knn", "svm", "lr", "dt", "rf", "nb"] {
        let light = Visualizer::new().render(id, &params, Theme::Light);
        let dark = Visualizer::new().render(id, &params, Theme::Dark);
        assert_eq!(light.theme, Theme::Light);
        assert_eq!(dark.theme, Theme::Dark);
        assert_eq!(
            light.primitives, dark.primitives,
            "theme leaked into geometry for {id}"
        );
    }
}

#[test]
fn scenes_round_trip_through_json() {
    let mut viz = Visualizer::new();
    let params = ParamsByModel::default();
    for id in ["knn", "svm", "lr", "dt", "rf", "nb"] {
        let scene = viz.render(id, &params, Theme::Dark);
        let json = serde_json::to_string(&scene).expect("serialize");
        let back: Scene = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(scene, back, "lossy round trip for {id}");
    }
}

#[test]
fn extreme_params_still_render() {
    let mut viz = Visualizer::new();
    let params = ParamsByModel {
        knn: KnnParams {
            k: 0,
            metric: Metric::Manhattan,
        },
        svm: SvmParams {
            c: 1000.0,
            kernel: Kernel::Linear,
        },
        lr: LogisticParams { c: 0.0 },
        dt: TreeParams { max_depth: 99 },
        rf: ForestParams { trees: 5000 },
        nb: BayesParams { smoothing: 0.0 },
    };
    for id in ["knn", "svm", "lr", "dt", "rf", "nb"] {
        let scene = viz.render(id, &params, Theme::Dark);
        assert!(!scene.is_empty(), "extreme params broke {id}");
    }
    // trees clamps to 200, dots cap at 60: tally still covers the dots.
    let forest = viz.render("rf", &params, Theme::Dark);
    let beams = forest.line_count();
    assert_eq!(beams, 60);
}
