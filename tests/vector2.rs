use num_traits::ToPrimitive;
use vectors::{Error, Vector2};

const TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug)]
struct Unrepresentable(bool);

impl ToPrimitive for Unrepresentable {
    fn to_i64(&self) -> Option<i64> {
        if self.0 { Some(1) } else { None }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.0 { Some(1) } else { None }
    }
}

fn assert_type_mismatch(err: Error, expected_name: &str) {
    match err {
        Error::TypeMismatch {
            name,
            expected,
            actual,
        } => {
            assert_eq!(expected_name, name);
            assert_eq!("f64", expected);
            assert!(actual.ends_with("Unrepresentable"), "{}", actual);
        }
        _ => panic!("expected a type mismatch, got {:?}", err),
    }
}

fn samples() -> Vec<Vector2> {
    vec![
        Vector2::new(1., 2.),
        Vector2::new(-3.5, 0.25),
        Vector2::new(1e6, -7.),
        Vector2::new(0., 0.),
        Vector2::new(-0.001, 42.),
    ]
}

#[test]
fn additive_identities() {
    for v in samples() {
        assert_eq!(v, v + 0);
        assert_eq!(Vector2::ZERO, v - v);
        assert_eq!(v, v * 1);
    }
}

#[test]
fn normalized_has_unit_length() {
    for v in samples() {
        if v.length() != 0. {
            assert!((v.normalized().length() - 1.).abs() < TOLERANCE, "{}", v);
        }
    }
    let zero = Vector2::ZERO.normalized();
    assert_eq!(Vector2::ZERO, zero);
    assert!(!zero.x.is_nan() && !zero.y.is_nan());
}

#[test]
fn length_squared_matches_length() {
    for v in samples() {
        let length = v.length();
        let relative = (v.length_squared() - length * length).abs() / length.max(1.).powi(2);
        assert!(relative < TOLERANCE, "{}", v);
    }
}

#[test]
fn dot_is_commutative() {
    let samples = samples();
    for a in &samples {
        for b in &samples {
            assert_eq!(a.dot(*b), b.dot(*a));
        }
    }
}

#[test]
fn cross_is_the_signed_area() {
    let a = Vector2::new(2., 0.);
    let b = Vector2::new(1., 3.);
    assert_eq!(6., a.cross(b));
    assert_eq!(-6., b.cross(a));
    assert_eq!(0., a.cross(a));
}

#[test]
fn rotation_round_trip() {
    for v in samples() {
        for angle in [0., 13., 90., -45., 180., 725.5] {
            let back = v.rotated(angle).rotated(-angle);
            let tolerance = TOLERANCE * v.length().max(1.);
            assert!(back.approx_eq(v, tolerance), "{} by {}", v, angle);
        }
    }
}

#[test]
fn rotation_keeps_length() {
    let v = Vector2::new(3., 4.);
    assert!((v.rotated(37.).length() - 5.).abs() < TOLERANCE);
}

#[test]
fn lerp_endpoints() {
    let samples = samples();
    for a in &samples {
        for b in &samples {
            assert_eq!(*a, a.lerp(*b, 0.));
            assert!(a.lerp(*b, 1.).approx_eq(*b, TOLERANCE * b.length().max(1.)));
        }
    }
    let a = Vector2::new(1., 2.);
    let b = Vector2::new(3., 4.);
    assert_eq!(b, a.lerp(b, 1.));
}

#[test]
fn swizzle_positional_assignment() {
    let mut v = Vector2::new(1., 2.);
    v.set_yx(&[5, 6]).unwrap();
    assert_eq!(6., v.x);
    assert_eq!(5., v.y);
    assert_eq!((5., 6.), v.yx());
    v.set_xy(&[7_u8, 8_u8]).unwrap();
    assert_eq!((7., 8.), v.xy());
}

#[test]
fn swizzle_from_a_vec() {
    let values = vec![0.5, -0.5];
    let mut v = Vector2::default();
    v.set_xy(&values).unwrap();
    assert_eq!(Vector2::new(0.5, -0.5), v);
}

#[test]
fn scenario_length() {
    assert_eq!(5.0, Vector2::new(3., 4.).length());
}

#[test]
fn scenario_rotation() {
    assert!((Vector2::new(1., 0.).rotated(90.).y - 1.).abs() < 1e-9);
}

#[test]
fn scenario_addition() {
    assert_eq!(
        Vector2::new(4., 6.),
        Vector2::new(1., 2.) + Vector2::new(3., 4.)
    );
}

#[test]
fn from_angle() {
    let v = Vector2::from_angle(45., 2_f64.sqrt());
    assert!(v.approx_eq(Vector2::new(1., 1.), TOLERANCE));
    let unit = Vector2::from_degrees(-90.);
    assert!(unit.approx_eq(-Vector2::Y, TOLERANCE));
}

#[test]
fn nan_propagates() {
    let v = Vector2::new(f64::NAN, 1.) + 1;
    assert!(v.x.is_nan());
    assert_eq!(2., v.y);
    assert_ne!(v, v);
}

#[test]
fn index_errors() {
    let mut v = Vector2::new(1., 2.);
    assert_eq!(
        Error::IndexOutOfRange { index: 7, len: 2 },
        v.get(7).unwrap_err()
    );
    assert!(v.set(2, 1).is_err());
    assert_eq!(Vector2::new(1., 2.), v);
}

#[test]
fn copies_are_independent() {
    let original = Vector2::new(1., 2.);
    let mut copy = original.copy();
    copy.rotate(90.);
    copy.x = 10.;
    assert_eq!(Vector2::new(1., 2.), original);
    assert_ne!(original, copy);
}

#[test]
fn floor_division() {
    let mut v = Vector2::new(7.5, -7.5);
    assert_eq!(Vector2::new(2., -3.), v.floor_divided(3));
    v.floor_divide(-2);
    assert_eq!(Vector2::new(-4., 3.), v);
}

#[test]
fn try_new_names_the_bad_component() {
    assert_type_mismatch(
        Vector2::try_new(1, Unrepresentable(false)).unwrap_err(),
        "y",
    );
    assert_type_mismatch(
        Vector2::try_new(Unrepresentable(false), 2.).unwrap_err(),
        "x",
    );
    assert_eq!(
        Vector2::new(1., 1.),
        Vector2::try_new(Unrepresentable(true), 1).unwrap()
    );
}

#[test]
fn set_rejects_unconvertible_value() {
    let mut v = Vector2::new(5., 6.);
    assert_type_mismatch(v.set(0, Unrepresentable(false)).unwrap_err(), "value");
    assert_eq!(Vector2::new(5., 6.), v);
}

#[test]
fn swizzle_conversion_failure_leaves_vector() {
    let mut v = Vector2::new(5., 6.);
    let err = v
        .set_yx(&[Unrepresentable(true), Unrepresentable(false)])
        .unwrap_err();
    assert_type_mismatch(err, "values");
    assert_eq!(Vector2::new(5., 6.), v);
    v.set_xy(&[Unrepresentable(true), Unrepresentable(true)]).unwrap();
    assert_eq!(Vector2::new(1., 1.), v);
}
