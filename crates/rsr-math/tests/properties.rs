//! Algebraic properties of the vector and matrix types, checked over a
//! fixed set of sample values.

use approx::assert_abs_diff_eq;
use rsr_math::{
    Matrix4f, Vector4f, cross, identity, normalize, rotate_x, rotate_y, rotate_z, scale,
    transform,
};
use std::f32::consts::PI;

const EPS: f32 = 1e-4;

fn sample_vectors() -> Vec<Vector4f> {
    vec![
        Vector4f::new(1.0, 2.0, 3.0, 1.0),
        Vector4f::new(-4.5, 0.25, 8.0, 0.0),
        Vector4f::new(0.0, -1.0, 0.5, 3.0),
        Vector4f::new(10.0, 10.0, -10.0, -2.0),
    ]
}

fn sample_matrices() -> Vec<Matrix4f> {
    vec![
        identity(),
        Matrix4f::new(
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        ),
        rotate_x(0.7) * scale(2.0, 0.5, 1.5),
        transform(3.0, -1.0, 2.0) * rotate_y(-1.2),
        Matrix4f::from_rows([
            [0.5, -0.25, 0.0, 1.0],
            [0.0, 2.0, -1.0, 0.0],
            [1.5, 0.0, 0.75, -0.5],
            [0.0, 0.0, 0.0, 1.0],
        ]),
    ]
}

#[test]
fn vector_add_sub_reset_w() {
    for a in sample_vectors() {
        for b in sample_vectors() {
            assert_eq!((a + b).w, 1.0);
            assert_eq!((a - b).w, 1.0);
        }
        assert_eq!((-a).w, 1.0);
        assert_eq!((a * 3.0).w, 1.0);
    }
}

#[test]
fn matrix_addition_is_associative() {
    let ms = sample_matrices();
    for a in &ms {
        for b in &ms {
            for c in &ms {
                let lhs = (*a + *b) + *c;
                let rhs = *a + (*b + *c);
                assert_abs_diff_eq!(lhs, rhs, epsilon = EPS);
            }
        }
    }
}

#[test]
fn matrix_product_is_associative() {
    let ms = sample_matrices();
    for a in &ms {
        for b in &ms {
            for c in &ms {
                let lhs = (*a * *b) * *c;
                let rhs = *a * (*b * *c);
                // entries of the integer sample grow into the thousands
                let tol = EPS * lhs.m.iter().flatten().fold(1.0_f32, |acc, x| acc.max(x.abs()));
                assert_abs_diff_eq!(lhs, rhs, epsilon = tol);
            }
        }
    }
}

#[test]
fn identity_is_neutral() {
    for m in sample_matrices() {
        assert_abs_diff_eq!(identity() * m, m, epsilon = EPS);
        assert_abs_diff_eq!(m * identity(), m, epsilon = EPS);
    }
    for v in sample_vectors() {
        assert_eq!(identity() * v, v);
    }
}

#[test]
fn row_vector_product_composes_left_to_right() {
    // (v * A) * B == v * (A * B) in row-vector notation
    let ms = sample_matrices();
    for v in sample_vectors() {
        for a in &ms {
            for b in &ms {
                let stepwise = *b * (*a * v);
                let combined = (*a * *b) * v;
                let tol = EPS * combined.to_array().iter().fold(1.0_f32, |acc, x| acc.max(x.abs()));
                assert_abs_diff_eq!(stepwise, combined, epsilon = tol * 10.0);
            }
        }
    }
}

#[test]
fn translation_moves_points() {
    let t = transform(1.5, -2.0, 4.0);
    for v in sample_vectors() {
        let p = Vector4f::from_xyz(v.x, v.y, v.z);

        let moved = t.transpose() * p;
        assert_abs_diff_eq!(moved.x, p.x + 1.5, epsilon = EPS);
        assert_abs_diff_eq!(moved.y, p.y - 2.0, epsilon = EPS);
        assert_abs_diff_eq!(moved.z, p.z + 4.0, epsilon = EPS);
        assert_abs_diff_eq!(moved.w, 1.0, epsilon = EPS);

        let direct = t * p;
        assert_eq!((direct.x, direct.y, direct.z), (p.x, p.y, p.z));
        assert_abs_diff_eq!(direct.w, 1.0 + 1.5 * p.x - 2.0 * p.y + 4.0 * p.z, epsilon = EPS);
    }
}

#[test]
fn scale_multiplies_components() {
    let m = scale(2.0, 3.0, 4.0);
    assert_eq!(m * Vector4f::new(1.0, 1.0, 1.0, 1.0), Vector4f::new(2.0, 3.0, 4.0, 1.0));

    for v in sample_vectors() {
        let p = Vector4f::from_xyz(v.x, v.y, v.z);
        let r = m * p;
        assert_eq!(r, Vector4f::new(p.x * 2.0, p.y * 3.0, p.z * 4.0, 1.0));
    }
}

#[test]
fn rotate_z_half_turn_negates_xy() {
    assert_eq!(rotate_z(0.0), identity());
    for v in sample_vectors() {
        let r = rotate_z(PI) * v;
        assert_abs_diff_eq!(r.x, -v.x, epsilon = EPS);
        assert_abs_diff_eq!(r.y, -v.y, epsilon = EPS);
        assert_abs_diff_eq!(r.z, v.z, epsilon = EPS);
        assert_abs_diff_eq!(r.w, v.w, epsilon = EPS);
    }
}

#[test]
fn rotations_preserve_length() {
    for v in sample_vectors() {
        let p = Vector4f::from_xyz(v.x, v.y, v.z);
        for r in [rotate_x(0.4), rotate_y(2.1), rotate_z(-0.9)] {
            assert_abs_diff_eq!((r * p).length(), p.length(), epsilon = EPS * 10.0);
        }
    }
}

#[test]
fn normalize_yields_unit_length() {
    for v in sample_vectors() {
        assert_abs_diff_eq!(normalize(v).length(), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn cross_is_antisymmetric() {
    for a in sample_vectors() {
        for b in sample_vectors() {
            assert_eq!(cross(a, b), -cross(b, a));
        }
        assert_eq!(cross(a, a), 0.0);
    }
}
