//! Monomials
//!
//! Polynomials of degree `k` in `tdim` variables are represented in the monomial basis
//! `x_0^{p_0} ... x_{tdim-1}^{p_{tdim-1}}` with `p_0 + ... + p_{tdim-1} <= k`. The monomials are
//! ordered like multi-indices, so in two variables the basis is `1, x, y, x^2, xy, y^2, ...`.
use crate::multi_index::{all_orders_up_to, derivative_count};
use rlst::RlstScalar;
use rlst::{RandomAccessByRef, RandomAccessMut, Shape};

/// The number of monomials of degree at most `degree` in `tdim` variables
pub fn polynomial_count(tdim: usize, degree: usize) -> usize {
    derivative_count(tdim, degree)
}

/// The shape of a table containing the values of monomials and their derivatives
pub fn monomial_shape(tdim: usize, npoints: usize, degree: usize, derivatives: usize) -> [usize; 3] {
    [
        derivative_count(tdim, derivatives),
        polynomial_count(tdim, degree),
        npoints,
    ]
}

/// The product p * (p - 1) * ... * (p - a + 1)
fn falling_factorial(p: usize, a: usize) -> usize {
    (p + 1 - a..=p).product()
}

/// Tabulate monomials and their derivatives
///
/// `data` has shape `[derivative, monomial, point]`, with derivatives in multi-index order.
/// Derivatives of every order are exact, so derivatives of order higher than `degree` are zero.
pub fn tabulate_monomials<
    T: RlstScalar,
    Array2: RandomAccessByRef<2, Item = T::Real> + Shape<2>,
    Array3Mut: RandomAccessMut<3, Item = T> + RandomAccessByRef<3, Item = T> + Shape<3>,
>(
    points: &Array2,
    degree: usize,
    derivatives: usize,
    data: &mut Array3Mut,
) {
    let tdim = points.shape()[1];
    assert_eq!(
        data.shape(),
        monomial_shape(tdim, points.shape()[0], degree, derivatives)
    );

    for (d, alpha) in all_orders_up_to(derivatives, tdim).enumerate() {
        for (m, power) in all_orders_up_to(degree, tdim).enumerate() {
            if alpha
                .entries()
                .iter()
                .zip(power.entries())
                .any(|(a, p)| a > p)
            {
                for i in 0..data.shape()[2] {
                    *data.get_mut([d, m, i]).unwrap() = T::zero();
                }
                continue;
            }
            let scale = alpha
                .entries()
                .iter()
                .zip(power.entries())
                .map(|(a, p)| falling_factorial(*p, *a))
                .product::<usize>();
            for i in 0..data.shape()[2] {
                let mut value = num::cast::<usize, T>(scale).unwrap();
                for (k, (a, p)) in alpha.entries().iter().zip(power.entries()).enumerate() {
                    let x = num::cast::<T::Real, T>(*points.get([i, k]).unwrap()).unwrap();
                    for _ in 0..p - a {
                        value *= x;
                    }
                }
                *data.get_mut([d, m, i]).unwrap() = value;
            }
        }
    }
}
