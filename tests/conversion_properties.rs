//! 모든 카테고리/단위 조합에 대한 항등, 왕복, 선형성 검사.
use unit_converter::conversion::{convert, convert_value};
use unit_converter::units::symbols;
use unit_converter::Category;

const SAMPLES: [f64; 5] = [0.0, 1.0, -3.5, 42.0, 1234.5678];

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn same_unit_is_identity() {
    for category in Category::ALL {
        for unit in symbols(category) {
            for v in SAMPLES {
                let r = convert(category.as_str(), v, unit, unit).expect("identity");
                assert_close(&format!("{category} {unit}"), r.converted_value, v, 1e-6);
            }
        }
    }
}

#[test]
fn round_trip_returns_original() {
    for category in Category::ALL {
        let units = symbols(category);
        for a in &units {
            for b in &units {
                for v in SAMPLES {
                    let there = convert_value(category, v, a, b).expect("forward");
                    let back = convert_value(category, there, b, a).expect("backward");
                    assert_close(&format!("{category} {a}->{b}->{a}"), back, v, 1e-6);
                }
            }
        }
    }
}

#[test]
fn linear_categories_scale_with_value() {
    let linear = Category::ALL
        .into_iter()
        .filter(|c| *c != Category::Temperature);
    for category in linear {
        let units = symbols(category);
        for a in &units {
            for b in &units {
                let base = convert_value(category, 2.0, a, b).expect("base");
                for k in [-4.0, 0.5, 10.0] {
                    let scaled = convert_value(category, 2.0 * k, a, b).expect("scaled");
                    assert_close(&format!("{category} {a}->{b} x{k}"), scaled, k * base, 1e-9);
                }
            }
        }
    }
}

#[test]
fn temperature_is_affine_not_linear() {
    let zero_f = convert_value(Category::Temperature, 0.0, "C", "F").unwrap();
    assert_close("0C", zero_f, 32.0, 1e-12);
    let doubled = convert_value(Category::Temperature, 20.0, "C", "F").unwrap();
    let single = convert_value(Category::Temperature, 10.0, "C", "F").unwrap();
    assert!((doubled - 2.0 * single).abs() > 1.0);
}

#[test]
fn returned_values_have_at_most_six_decimals() {
    for category in Category::ALL {
        let units = symbols(category);
        for a in &units {
            for b in &units {
                let r = convert(category.as_str(), 1.234_567_89, a, b).unwrap();
                let scaled = r.converted_value * 1e6;
                let tol = 1e-3_f64.max(scaled.abs() * 1e-12);
                assert!(
                    (scaled - scaled.round()).abs() <= tol,
                    "{category} {a}->{b} gave {}",
                    r.converted_value
                );
            }
        }
    }
}

#[test]
fn chaining_uses_unrounded_values() {
    let shown = convert("length", 1.0, "mm", "mi").unwrap().converted_value;
    assert_eq!(shown, 0.000001);
    let back_from_shown = convert("length", shown, "mi", "mm").unwrap().converted_value;
    assert_close("rounded chain", back_from_shown, 1.60934, 1e-9);

    let raw = convert_value(Category::Length, 1.0, "mm", "mi").unwrap();
    let back = convert_value(Category::Length, raw, "mi", "mm").unwrap();
    assert_close("raw chain", back, 1.0, 1e-12);
}
