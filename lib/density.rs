//! Reduction of wavefunctions to probability densities and display
//! intensities.

use ndarray as nd;
use num_complex::Complex;
use num_traits::Float;

/// Scalar types with a squared modulus.
pub trait SquaredModulus: Copy {
    /// Real type of the modulus.
    type Real: Float;

    /// Compute |`self`|².
    fn modulus_sqr(self) -> Self::Real;
}

impl SquaredModulus for f64 {
    type Real = f64;

    fn modulus_sqr(self) -> f64 { self * self }
}

impl SquaredModulus for f32 {
    type Real = f32;

    fn modulus_sqr(self) -> f32 { self * self }
}

impl<T: Float> SquaredModulus for Complex<T> {
    type Real = T;

    fn modulus_sqr(self) -> T { self.norm_sqr() }
}

/// Compute the probability density |*ψ*|² elementwise, for real or complex
/// *ψ*. Every output value is non-negative.
///
/// ```
/// use ndarray as nd;
/// use num_complex::Complex64 as C64;
/// use hydrogen::density::density;
///
/// assert_eq!(density(&nd::array![-2.0_f64, 0.0, 3.0]), nd::array![4.0, 0.0, 9.0]);
/// assert_eq!(density(&nd::array![C64::new(3.0, -4.0)]), nd::array![25.0]);
/// ```
pub fn density<S, A, D>(psi: &nd::ArrayBase<S, D>)
    -> nd::Array<A::Real, D>
where
    S: nd::Data<Elem = A>,
    A: SquaredModulus,
    D: nd::Dimension,
{
    psi.mapv(A::modulus_sqr)
}

/// Compress the dynamic range of a probability density for display by taking
/// its square root (i.e. |*ψ*|).
pub fn intensity<S, A, D>(prob: &nd::ArrayBase<S, D>) -> nd::Array<A, D>
where
    S: nd::Data<Elem = A>,
    A: Float,
    D: nd::Dimension,
{
    prob.mapv(|pk| pk.max(A::zero()).sqrt())
}

/// Like [`intensity`], but rescaled so that the largest value is 1.
///
/// An all-zero density is returned as all zeros.
pub fn normalized_intensity<S, A, D>(prob: &nd::ArrayBase<S, D>)
    -> nd::Array<A, D>
where
    S: nd::Data<Elem = A>,
    A: Float,
    D: nd::Dimension,
{
    let mut I = intensity(prob);
    let max = I.iter().copied().fold(A::zero(), A::max);
    if max > A::zero() {
        I.mapv_inplace(|Ik| Ik / max);
    }
    I
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64 as C64;
    use proptest::prelude::*;

    #[test]
    fn complex_density() {
        let psi = nd::array![[C64::new(0.0, 1.0), C64::new(-1.0, -1.0)]];
        let p = density(&psi);
        assert_eq!(p, nd::array![[1.0, 2.0]]);
    }

    #[test]
    fn intensities() {
        let p = nd::array![0.0, 4.0, 16.0];
        assert_eq!(intensity(&p), nd::array![0.0, 2.0, 4.0]);
        assert_eq!(normalized_intensity(&p), nd::array![0.0, 0.5, 1.0]);
        let z: nd::Array1<f64> = nd::Array1::zeros(4);
        assert_eq!(normalized_intensity(&z), z);
    }

    proptest! {
        #[test]
        fn density_is_nonnegative(
            v in prop::collection::vec(-1e150..1e150f64, 1..64),
            w in prop::collection::vec(-1e150..1e150f64, 1..64),
        ) {
            let re = nd::Array1::from(v);
            prop_assert!(density(&re).iter().all(|p| *p >= 0.0));
            let c: nd::Array1<C64>
                = re.iter().zip(&w).map(|(a, b)| C64::new(*a, *b)).collect();
            prop_assert!(density(&c).iter().all(|p| *p >= 0.0));
        }
    }
}
