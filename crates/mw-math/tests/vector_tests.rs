// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used)]
use mw_math::{MathError, Tolerance, Vector, Vector2, Vector3, Vector4};

fn approx_eq(a: f64, b: f64) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-12, "expected {b}, got {a} (diff {diff})");
}

#[test]
fn construction_and_named_components() {
    let v = Vector2::<f64>::default();
    assert_eq!(v.x(), 0.0);
    assert_eq!(v.y(), 0.0);
    assert_eq!(v.length(), 0.0);
    assert!(v.is_null());

    let v2 = Vector::xy(3.0_f64, 4.0);
    assert_eq!(v2.x(), 3.0);
    assert_eq!(v2.y(), 4.0);
    approx_eq(v2.length(), 5.0);
    assert!(!v2.is_null());

    let widened: Vector2<f64> = Vector::xy(3.0_f32, 4.0).cast();
    assert_eq!(widened.to_array(), [3.0, 4.0]);

    let v4 = Vector4::xyzw(1.0_f32, 2.0, 3.0, 4.0);
    assert_eq!([v4.x(), v4.y(), v4.z(), v4.w()], [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(v4.dimension(), 4);
}

#[test]
fn setters_then_normalize() {
    let mut v = Vector2::<f64>::zero();
    v.set_x(2.0);
    assert_eq!(v.x(), 2.0);
    v.set_y(2.0);
    assert_eq!(v.y(), 2.0);
    v = Vector::xy(3.0, 3.0);
    v.normalize().unwrap();
    approx_eq(v.x(), 2.0_f64.sqrt() / 2.0);
    approx_eq(v.y(), 2.0_f64.sqrt() / 2.0);
    approx_eq(v.length(), 1.0);
}

#[test]
fn indexed_access_is_bounds_checked() {
    let mut v = Vector::new([1.0_f32, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(v.get(4), Ok(5.0));
    assert_eq!(
        v.set(5, 0.0),
        Err(MathError::OutOfRange {
            index: 5,
            dimension: 5
        })
    );
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn arithmetic_operators() {
    let v = Vector::xy(1.0_f64, 0.0);
    let v2 = Vector::xy(0.0_f64, 1.0);
    let v3 = Vector::xy(0.0_f64, 1.0);

    assert_eq!(v, v);
    assert_eq!(v2, v3);
    assert_ne!(v, v2);

    assert_eq!(v + v2, Vector::xy(1.0, 1.0));
    assert_eq!(v - v2, Vector::xy(1.0, -1.0));
    assert_eq!(2.0_f64 * v, Vector::xy(2.0, 0.0));
    assert_eq!(v * 2.0, Vector::xy(2.0, 0.0));
    assert_eq!((v / 2.0).unwrap(), Vector::xy(0.5, 0.0));
    assert_eq!(-v, Vector::xy(-1.0, 0.0));
    assert!((v - v).is_null());

    let mut acc = v;
    acc += v2;
    acc -= v;
    acc *= 3.0;
    assert_eq!(acc, Vector::xy(0.0, 3.0));
}

#[test]
fn dot_products() {
    let v = Vector::xy(1.0_f64, 0.0);
    let v2 = Vector::xy(0.0_f64, 1.0);
    assert_eq!(v.dot(&v2), 0.0);
    assert_eq!(v.dot(&v), 1.0);
    assert_eq!(v2.dot(&v2), 1.0);
    assert_eq!(Vector::xy(2.0_f64, 0.5).dot(&Vector::xy(0.5, 2.0)), 2.0);
    assert_eq!(Vector::xy(2.0_f32, 0.5).dot(&Vector::xy(0.5, 2.0)), 2.0);
}

#[test]
fn vector_projections() {
    let v = Vector::xy(1.0_f64, 1.0);
    let v2 = Vector::xy(2.0_f64, 0.0);
    let v3 = Vector::xy(0.0_f64, -1.0);

    assert_eq!(v.projection(&v2).unwrap(), Vector::xy(1.0, 0.0));
    assert_eq!(v2.projection(&v).unwrap(), Vector::xy(1.0, 1.0));
    assert_eq!(v.projection(&v3).unwrap(), Vector::xy(0.0, 1.0));
    assert_eq!(v3.projection(&v).unwrap(), Vector::xy(-0.5, -0.5));
    assert_eq!(v2.projection(&v3).unwrap(), Vector::xy(0.0, 0.0));

    let mut p = v;
    p.project(&v2).unwrap();
    assert_eq!(p, Vector::xy(1.0, 0.0));
}

#[test]
fn scalar_projections() {
    let v = Vector::xy(1.0_f64, 1.0);
    let v2 = Vector::xy(2.0_f64, 0.0);
    let v3 = Vector::xy(0.0_f64, -1.0);

    assert_eq!(v.scalar_projection(&v2), Ok(1.0));
    approx_eq(v2.scalar_projection(&v).unwrap(), 2.0_f64.sqrt());
    assert_eq!(v.scalar_projection(&v3), Ok(-1.0));
    approx_eq(v3.scalar_projection(&v).unwrap(), -(2.0_f64.sqrt()) / 2.0);
    assert_eq!(v2.scalar_projection(&v3), Ok(0.0));
}

#[test]
fn projection_onto_null_vector_fails() {
    let mut v = Vector::xyz(1.0_f64, 2.0, 3.0);
    let null = Vector3::<f64>::zero();
    assert_eq!(v.projection(&null), Err(MathError::NullVector));
    assert_eq!(v.scalar_projection(&null), Err(MathError::NullVector));
    assert_eq!(v.project(&null), Err(MathError::NullVector));
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(null.normalized(), Err(MathError::NullVector));
}

#[test]
fn null_vector_projects_to_null() {
    let null = Vector2::<f32>::zero();
    assert!(null.projection(&Vector::xy(3.0, 1.0)).unwrap().is_null());
}

#[test]
fn perpendicular_normals() {
    let v = Vector::xy(1.0_f64, 2.0);
    assert_eq!(v.right_hand_normal(), Vector::xy(-2.0, 1.0));
    assert_eq!(v.left_hand_normal(), Vector::xy(2.0, -1.0));
}

#[test]
fn rotations_f64() {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    let v = Vector::xy(1.0_f64, 0.0);
    assert_eq!(v.rotated(PI), Vector::xy(-1.0, 0.0));
    assert_eq!(v.rotated(FRAC_PI_2), Vector::xy(0.0, 1.0));
    let half_sqrt2 = 2.0_f64.sqrt() / 2.0;
    assert!(v
        .rotated(FRAC_PI_4)
        .approx_eq(&Vector::xy(half_sqrt2, half_sqrt2), Tolerance::default()));

    let mut r = v;
    r.rotate(FRAC_PI_2);
    r.rotate(FRAC_PI_2);
    assert!(r.approx_eq(&Vector::xy(-1.0, 0.0), Tolerance::default()));
}

#[test]
fn rotations_f32() {
    use std::f32::consts::{FRAC_PI_2, PI};
    let v = Vector::xy(1.0_f32, 0.0);
    assert_eq!(v.rotated(PI), Vector::xy(-1.0, 0.0));
    assert_eq!(v.rotated(FRAC_PI_2), Vector::xy(0.0, 1.0));
}

#[test]
fn cross_product_follows_right_hand_rule() {
    let x = Vector3::<f64>::unit_x();
    let y = Vector3::<f64>::unit_y();
    let z = Vector3::<f64>::unit_z();
    assert_eq!(x.cross(&y), z);
    assert_eq!(y.cross(&z), x);
    assert_eq!(z.cross(&x), y);
    assert_eq!(y.cross(&x), -z);

    let a = Vector::xyz(1.0_f64, 2.0, 3.0);
    let b = Vector::xyz(-4.0_f64, 0.5, 2.0);
    let c = a.cross(&b);
    assert_eq!(c, -b.cross(&a));
    approx_eq(c.dot(&a), 0.0);
    approx_eq(c.dot(&b), 0.0);
}

#[test]
fn equality_uses_machine_epsilon() {
    let a = Vector::xy(1.0_f64, 0.0);
    let b = Vector::xy(1.0_f64, f64::EPSILON / 2.0);
    let c = Vector::xy(1.0_f64, 1e-9);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.approx_eq(&c, Tolerance::default()));
    assert!(!a.approx_eq(&b, Tolerance::exact()));
}

#[test]
fn array_conversions() {
    let v: Vector3<f32> = [1.0, 2.0, 3.0].into();
    let back: [f32; 3] = v.into();
    assert_eq!(back, [1.0, 2.0, 3.0]);
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn huge_vectors_normalize_to_unit_length() {
    let v = Vector::xy(1.0e20_f32, 0.0);
    assert_eq!(v.length(), 1.0e20);
    assert_eq!(v.normalized().unwrap(), Vector::xy(1.0, 0.0));

    let w = Vector::xyz(3.0e30_f32, -4.0e30, 0.0);
    let rel = (w.length() / 5.0e30 - 1.0).abs();
    assert!(rel <= 1e-6, "relative error {rel}");
    let n = w.normalized().unwrap();
    assert!(n.approx_eq(&Vector::xyz(0.6, -0.8, 0.0), Tolerance::new(1e-6, 0.0)));
}

#[test]
fn tiny_vectors_are_not_null() {
    let v = Vector::xy(1.0e-30_f32, 0.0);
    assert!(!v.is_null());
    assert_eq!(v.length(), 1.0e-30);
    assert_eq!(v.normalized().unwrap(), Vector::xy(1.0, 0.0));

    let w = Vector::xy(1.0e-30_f32, 1.0e-30);
    let half_sqrt2 = core::f32::consts::FRAC_1_SQRT_2;
    assert!(w
        .normalized()
        .unwrap()
        .approx_eq(&Vector::xy(half_sqrt2, half_sqrt2), Tolerance::new(1e-6, 0.0)));
}

#[test]
fn projection_onto_tiny_or_huge_axis() {
    let v = Vector::xy(1.0_f32, 1.0);
    assert_eq!(v.projection(&Vector::xy(1.0e-25, 0.0)).unwrap(), Vector::xy(1.0, 0.0));
    assert_eq!(v.projection(&Vector::xy(0.0, -1.0e25)).unwrap(), Vector::xy(0.0, 1.0));
    assert_eq!(v.scalar_projection(&Vector::xy(1.0e-25, 0.0)), Ok(1.0));
}
