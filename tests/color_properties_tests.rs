//! Property checks for the color engine over a grid of sRGB colors.

use univassist::accessibility::{
    choose, classify, contrast_ratio, simulate_red_green, ComplianceLevel,
};
use univassist::models::{RgbColor, ShadeLadder};

/// 6x6x6 grid covering the sRGB cube corners and midpoints.
fn grid() -> Vec<RgbColor> {
    let steps = [0u8, 51, 102, 153, 204, 255];
    let mut colors = Vec::with_capacity(steps.len().pow(3));
    for r in steps {
        for g in steps {
            for b in steps {
                colors.push(RgbColor::new(r, g, b));
            }
        }
    }
    colors
}

#[test]
fn test_hex_roundtrip() {
    for color in grid() {
        let hex = color.to_hex();
        assert_eq!(RgbColor::from_hex(&hex).unwrap(), color);
        assert_eq!(RgbColor::from_hex(&hex.to_lowercase()).unwrap().to_hex(), hex);
    }
}

#[test]
fn test_shorthand_equals_expanded() {
    assert_eq!(
        RgbColor::from_hex("#abc").unwrap(),
        RgbColor::from_hex("#aabbcc").unwrap()
    );
    assert!(RgbColor::from_hex("not-a-color").is_err());
}

#[test]
fn test_contrast_symmetric_and_bounded() {
    let colors = grid();
    for a in colors.iter().step_by(7) {
        assert!((contrast_ratio(a, a).value() - 1.0).abs() < 1e-12);
        for b in &colors {
            let ab = contrast_ratio(a, b).value();
            let ba = contrast_ratio(b, a).value();
            assert!((ab - ba).abs() < 1e-12);
            assert!((1.0..=21.0 + 1e-9).contains(&ab), "{a} vs {b}: {ab}");
        }
    }
    let max = contrast_ratio(&RgbColor::BLACK, &RgbColor::WHITE).value();
    assert!((max - 21.0).abs() < 1e-3);
}

#[test]
fn test_classify_boundaries() {
    assert_eq!(classify(4.5), ComplianceLevel::Aa);
    assert_eq!(classify(4.499), ComplianceLevel::Fail);
    assert_eq!(classify(7.0), ComplianceLevel::Aaa);
    assert_eq!(classify(6.999), ComplianceLevel::Aa);
}

#[test]
fn test_ladder_monotonic_brightness() {
    for base in grid() {
        let ladder = ShadeLadder::generate(base);
        assert_eq!(ladder.get("500"), Some(base));

        let brightness: Vec<f64> = ladder
            .iter()
            .map(|shade| shade.color.perceptual_brightness())
            .collect();
        assert!(
            brightness.windows(2).all(|w| w[0] >= w[1]),
            "ladder for {base} is not darkening: {brightness:?}"
        );
    }
}

#[test]
fn test_double_complement_is_identity() {
    for color in grid() {
        let back = color.complementary().complementary();
        for (x, y) in [(color.r, back.r), (color.g, back.g), (color.b, back.b)] {
            assert!(x.abs_diff(y) <= 1, "{color} -> {back}");
        }
    }
}

#[test]
fn test_choose_always_reaches_aa() {
    let colors = grid();
    for background in &colors {
        let fallback = choose(*background, None);
        assert!(fallback.ratio.passes_aa(), "{background}: {}", fallback.ratio);

        for suggested in colors.iter().step_by(5) {
            let pair = choose(*background, Some(*suggested));
            assert!(pair.ratio.passes_aa());
            assert!(pair.level.is_pass());
            assert_eq!(pair.corrected, pair.text != *suggested);
        }
    }
}

#[test]
fn test_simulation_preserves_grays() {
    for v in [0u8, 17, 51, 128, 200, 255] {
        let gray = RgbColor::new(v, v, v);
        assert_eq!(simulate_red_green(&gray), gray);
    }
}

#[test]
fn test_reference_blue() {
    let blue = RgbColor::from_hex("#3B82F6").unwrap();
    assert_eq!(ShadeLadder::generate(blue).base(), blue);
    assert_eq!(blue.contrasting_text_color(), RgbColor::WHITE);

    let ratio = contrast_ratio(&blue, &RgbColor::WHITE);
    assert!((ratio.value() - 3.68).abs() < 0.01);
    assert!(!ratio.passes_aa());
}
