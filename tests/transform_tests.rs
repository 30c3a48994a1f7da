use ndarray as nd;
use num_complex::Complex64 as C64;
use qbasis::{
    basis::BoxBasis,
    grid::PositionGrid,
    transform::{ energy_to_position, gaussian_packet, position_to_energy },
    utils::wf_norm,
};

fn c(x: f64) -> C64 { C64::from(x) }

#[test]
fn box_basis_is_orthonormal_on_fine_grid() {
    let grid = PositionGrid::linspace(0.0, 1.0, 1000).unwrap();
    let basis = BoxBasis::new(1.0, 5).unwrap();
    let overlap = basis.overlap_matrix(&grid);
    for m in 0..5 {
        for n in 0..5 {
            let expected = if m == n { 1.0 } else { 0.0 };
            assert!(
                (overlap[[m, n]] - expected).abs() < 1e-3,
                "overlap[{}, {}] = {} should be {}",
                m, n, overlap[[m, n]], expected,
            );
        }
    }
}

#[test]
fn ground_state_round_trip() {
    let grid = PositionGrid::linspace(0.0, 1.0, 1000).unwrap();
    let basis = BoxBasis::new(1.0, 5).unwrap();
    let coeffs: nd::Array1<C64>
        = nd::array![c(1.0), c(0.0), c(0.0), c(0.0), c(0.0)];
    let psi = energy_to_position(&basis, &coeffs, &grid);
    let recovered = position_to_energy(&basis, &psi, &grid).unwrap();
    assert_eq!(recovered.len(), 5);
    for (cn, rn) in coeffs.iter().zip(&recovered) {
        assert!((cn - rn).norm() < 1e-4, "recovered {} for {}", rn, cn);
    }
}

#[test]
fn superposition_round_trip() {
    let grid = PositionGrid::linspace(0.0, 1.0, 1000).unwrap();
    let basis = BoxBasis::new(1.0, 5).unwrap();
    let r = 0.5_f64.sqrt();
    let coeffs: nd::Array1<C64>
        = nd::array![c(r), c(r), c(0.0), c(0.0), c(0.0)];
    let psi = energy_to_position(&basis, &coeffs, &grid);
    let recovered = position_to_energy(&basis, &psi, &grid).unwrap();
    for (cn, rn) in coeffs.iter().zip(&recovered) {
        assert!((cn - rn).norm() < 1e-4);
    }
}

#[test]
fn forward_transform_truncates_past_cutoff() {
    let grid = PositionGrid::linspace(0.0, 1.0, 500).unwrap();
    let basis = BoxBasis::new(1.0, 2).unwrap();
    // third coefficient lies past n_max and must be silently dropped
    let short: nd::Array1<C64> = nd::array![c(1.0), c(0.5)];
    let long: nd::Array1<C64> = nd::array![c(1.0), c(0.5), c(7.0)];
    let psi_short = energy_to_position(&basis, &short, &grid);
    let psi_long = energy_to_position(&basis, &long, &grid);
    for (a, b) in psi_short.iter().zip(&psi_long) {
        assert!((a - b).norm() < 1e-15);
    }
}

#[test]
fn inverse_transform_rejects_mismatched_samples() {
    let grid = PositionGrid::linspace(0.0, 1.0, 500).unwrap();
    let basis = BoxBasis::new(1.0, 5).unwrap();
    let samples: nd::Array1<C64> = nd::Array1::zeros(499);
    assert!(position_to_energy(&basis, &samples, &grid).is_err());
}

#[test]
fn too_coarse_grid_is_rejected() {
    assert!(PositionGrid::linspace(0.0, 1.0, 1).is_err());
    assert!(PositionGrid::linspace(0.0, 1.0, 0).is_err());
}

#[test]
fn gaussian_packet_decomposition_conserves_probability() {
    let grid = PositionGrid::linspace(0.0, 1.0, 1000).unwrap();
    let basis = BoxBasis::new(1.0, 30).unwrap();
    let psi = gaussian_packet(&grid, 0.3, 0.1);
    assert!((wf_norm(&psi, grid.get_dx()) - 1.0).abs() < 1e-9);

    let coeffs = position_to_energy(&basis, &psi, &grid).unwrap();
    let total: f64 = coeffs.iter().map(|cn| cn.norm_sqr()).sum();
    // nearly all population should fit within the first 30 modes
    assert!(total > 0.99, "total probability {} too low", total);

    // reconstruction should track the original packet closely
    let psi_rec = energy_to_position(&basis, &coeffs, &grid);
    let max_err: f64
        = psi.iter().zip(&psi_rec)
        .map(|(a, b)| (a - b).norm())
        .fold(0.0, f64::max);
    assert!(max_err < 5e-2, "max reconstruction error {}", max_err);
}

#[test]
fn vanishing_gaussian_packet_stays_finite() {
    // centered far outside the grid with tiny width: every sample
    // underflows to zero and renormalization must not divide by it
    let grid = PositionGrid::linspace(0.0, 1.0, 200).unwrap();
    let psi = gaussian_packet(&grid, 1e6, 1e-3);
    assert!(psi.iter().all(|pk| pk.re == 0.0 && pk.im == 0.0));
    assert!(psi.iter().all(|pk| pk.re.is_finite() && pk.im.is_finite()));
}
