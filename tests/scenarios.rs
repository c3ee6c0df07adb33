use std::f64::consts::PI;
use ndarray as nd;
use proptest::prelude::*;
use hydrogen::{
    angular::angular,
    density::density,
    error::{ HError, QuantumError },
    grid::{ build_grid, YExtent },
    radial::radial,
    wavefunction::compose,
};

#[test]
fn ground_state_decays_from_origin() {
    let g = build_grid((-10.0, 10.0), YExtent::Range(-10.0, 10.0), 201).unwrap();
    let p = density(&compose(1.0, 1, 0, 0, &g.x, &g.y).unwrap());

    // peak at the grid point nearest the origin
    let (imax, _) = p.indexed_iter()
        .fold(((0, 0), f64::NEG_INFINITY), |best, (idx, pk)| {
            if *pk > best.1 { (idx, *pk) } else { best }
        });
    assert_eq!(imax, (100, 100));
    assert!(g.x[imax].abs() < 1e-12 && g.y[imax].abs() < 1e-12);

    // strictly decreasing along rays: the four axes and the two diagonals
    let rays: [(isize, isize); 8]
        = [(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (-1, -1), (1, -1), (-1, 1)];
    for (di, dj) in rays.iter() {
        let vals: Vec<f64>
            = (0..=100_isize)
            .map(|k| p[[(100 + k * di) as usize, (100 + k * dj) as usize]])
            .collect();
        assert!(
            vals.windows(2).all(|w| w[1] < w[0]),
            "density not decreasing along ({}, {})", di, dj,
        );
    }
}

#[test]
fn two_p_has_polar_lobes_and_equatorial_node() {
    let g = build_grid((-20.0, 20.0), YExtent::Range(-20.0, 20.0), 401).unwrap();
    let p = density(&compose(1.0, 2, 1, 0, &g.x, &g.y).unwrap());
    let pmax = p.iter().cloned().fold(0.0, f64::max);

    // node plane: the row y = 0 (θ = π/2)
    let equator = p.row(200);
    assert!(equator.iter().all(|pk| *pk < 1e-20 * pmax));

    // lobes on the polar axis, at |y| = 2 a0 (maximum of r R_21)
    let axis = p.column(200);
    let (iup, _) = axis.iter().enumerate().skip(201)
        .fold((0, 0.0), |best, (i, pk)| if *pk > best.1 { (i, *pk) } else { best });
    let (idown, _) = axis.iter().enumerate().take(200)
        .fold((0, 0.0), |best, (i, pk)| if *pk > best.1 { (i, *pk) } else { best });
    assert!((g.y[[iup, 200]] - 2.0).abs() < 1e-9);
    assert!((g.y[[idown, 200]] + 2.0).abs() < 1e-9);
    assert!((axis[iup] - pmax).abs() <= 1e-12 * pmax);
    assert!((axis[idown] - pmax).abs() <= 1e-12 * pmax);

    // symmetric top/bottom
    for i in 0..200 {
        for j in 0..401 {
            let a = p[[i, j]];
            let b = p[[400 - i, j]];
            assert!((a - b).abs() <= 1e-12 * pmax);
        }
    }
}

#[test]
fn s_orbitals_are_isotropic() {
    let theta: nd::Array1<f64> = nd::Array1::linspace(-PI, PI, 101);
    let Y = angular(0, 0, &theta, 0.0).unwrap();
    assert!(Y.iter().all(|Yk| *Yk == Y[0]));
}

#[test]
fn radial_nodes_by_sign_change() {
    let r: nd::Array1<f64> = nd::Array1::linspace(1e-3, 60.0, 30000);
    for &(n, l, nodes) in [(1, 0, 0), (2, 0, 1), (2, 1, 0), (3, 0, 2), (3, 1, 1), (3, 2, 0)].iter() {
        let R = radial(1.0, n, l, &r).unwrap();
        let changes = R.iter().zip(R.iter().skip(1))
            .filter(|(a, b)| **a * **b < 0.0)
            .count();
        assert_eq!(changes, nodes, "n = {}, l = {}", n, l);
    }
}

#[test]
fn invalid_states_rejected() {
    let g = build_grid((-1.0, 1.0), YExtent::Range(-1.0, 1.0), 5).unwrap();
    assert!(matches!(
        compose(1.0, 2, 2, 0, &g.x, &g.y),
        Err(HError::Quantum(QuantumError::BadAzimuthal { n: 2, l: 2 }))
    ));
    assert!(matches!(
        compose(1.0, 2, 1, 2, &g.x, &g.y),
        Err(HError::Quantum(QuantumError::BadMagnetic { l: 1, m: 2 }))
    ));
    assert!(matches!(
        compose(1.0, 0, 0, 0, &g.x, &g.y),
        Err(HError::Quantum(QuantumError::BadPrincipal(0)))
    ));
    assert!(matches!(compose(1.0, 31, 0, 0, &g.x, &g.y), Err(HError::Range(_))));
}

#[test]
fn top_of_supported_range() {
    let g = build_grid((-500.0, 500.0), YExtent::aspect(1.0), 200).unwrap();
    for &(l, m) in [(0, 0), (29, 29), (29, -29), (15, 3)].iter() {
        let p = density(&compose(0.7, 30, l, m, &g.x, &g.y).unwrap());
        assert!(p.iter().all(|pk| pk.is_finite() && *pk >= 0.0), "l = {}, m = {}", l, m);
    }
}

fn valid_state() -> impl Strategy<Value = (i32, i32, i32)> {
    (1..=12_i32)
        .prop_flat_map(|n| (Just(n), 0..n))
        .prop_flat_map(|(n, l)| (Just(n), Just(l), -l..=l))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn density_is_finite_and_nonnegative(
        (n, l, m) in valid_state(),
        a0 in 0.05..5.0_f64,
        half_width in 0.5..200.0_f64,
        aspect in 0.25..4.0_f64,
        npoints in 2..40_usize,
    ) {
        let g = build_grid((-half_width, half_width), YExtent::aspect(aspect), npoints)
            .unwrap();
        let p = density(&compose(a0, n, l, m, &g.x, &g.y).unwrap());
        prop_assert_eq!(p.dim(), g.dim());
        prop_assert!(p.iter().all(|pk| pk.is_finite() && *pk >= 0.0));
    }
}
