use std::path::PathBuf;

use cs_plan::{load_yaml, segment_count};
use cs_poly::QuinticSegment;

fn plans_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../plans")
}

#[test]
fn bundled_plans_load_and_build() {
    let entries = std::fs::read_dir(plans_dir()).unwrap();
    let mut loaded = 0;

    for entry in entries {
        let path = entry.unwrap().path();
        if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
            continue;
        }
        let plan = load_yaml(&path).unwrap();
        let spline = plan.build_spline::<QuinticSegment>().unwrap();
        assert_eq!(Some(spline.segments().unwrap().len()), segment_count(&plan));

        let expected: f64 = plan.phases.iter().map(|p| p.duration).sum();
        assert!((spline.total_duration().unwrap() - expected).abs() < 1e-9);
        loaded += 1;
    }

    assert!(loaded > 0, "no plans found in {}", plans_dir().display());
}
