//! Cubic spline interpolation with not-a-knot end conditions.
//!
//! Two knots degrade to a straight line and three to the interpolating
//! parabola, which is what not-a-knot reduces to at those sizes.

use crate::core::{SamplingError, SamplingResult};

#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Second derivative at each knot
    m: Vec<f64>,
}

impl CubicSpline {
    pub fn new(x: &[f64], y: &[f64]) -> SamplingResult<Self> {
        if x.len() != y.len() {
            return Err(SamplingError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(SamplingError::InsufficientData {
                required: 2,
                actual: x.len(),
            });
        }
        if let Some(index) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SamplingError::UnsortedGrid { index: index + 1 });
        }

        let m = second_derivatives(x, y);
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            m,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Evaluate at `t`; targets outside the knot range are rejected
    pub fn evaluate(&self, t: f64) -> SamplingResult<f64> {
        let (min, max) = self.domain();
        let tol = 1e-9 * (max - min).abs().max(1.0);
        if !(t >= min - tol && t <= max + tol) {
            return Err(SamplingError::Extrapolation { target: t, min, max });
        }
        let t = t.clamp(min, max);

        let n = self.x.len();
        let i = self.x.partition_point(|&xi| xi <= t).clamp(1, n - 1) - 1;

        let h = self.x[i + 1] - self.x[i];
        let a = self.x[i + 1] - t;
        let b = t - self.x[i];
        let (mi, mj) = (self.m[i], self.m[i + 1]);

        Ok(mi * a.powi(3) / (6.0 * h)
            + mj * b.powi(3) / (6.0 * h)
            + (self.y[i] / h - mi * h / 6.0) * a
            + (self.y[i + 1] / h - mj * h / 6.0) * b)
    }
}

fn second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

    match n {
        2 => vec![0.0; 2],
        3 => {
            let curvature = 2.0 * (slope[1] - slope[0]) / (h[0] + h[1]);
            vec![curvature; 3]
        }
        _ => not_a_knot(&h, &slope),
    }
}

/// Solve for interior second derivatives with the end ones eliminated by
/// third-derivative continuity at the second and second-to-last knots.
fn not_a_knot(h: &[f64], slope: &[f64]) -> Vec<f64> {
    let n = h.len() + 1;
    let size = n - 2;

    let mut sub = vec![0.0; size];
    let mut diag = vec![0.0; size];
    let mut sup = vec![0.0; size];
    let mut rhs = vec![0.0; size];

    for row in 0..size {
        let i = row + 1;
        sub[row] = h[i - 1];
        diag[row] = 2.0 * (h[i - 1] + h[i]);
        sup[row] = h[i];
        rhs[row] = 6.0 * (slope[i] - slope[i - 1]);
    }

    // M0 = (1 + h0/h1) M1 - (h0/h1) M2
    let (h0, h1) = (h[0], h[1]);
    diag[0] += h0 * (1.0 + h0 / h1);
    sup[0] -= h0 * h0 / h1;
    sub[0] = 0.0;

    // M[n-1] = (1 + hl/hp) M[n-2] - (hl/hp) M[n-3]
    let (hp, hl) = (h[n - 3], h[n - 2]);
    let last = size - 1;
    diag[last] += hl * (1.0 + hl / hp);
    sub[last] -= hl * hl / hp;
    sup[last] = 0.0;

    let interior = solve_tridiagonal(&sub, &diag, &sup, &rhs);

    let mut m = Vec::with_capacity(n);
    m.push((1.0 + h0 / h1) * interior[0] - (h0 / h1) * interior[1]);
    m.extend_from_slice(&interior);
    m.push((1.0 + hl / hp) * interior[last] - (hl / hp) * interior[last - 1]);
    m
}

/// Thomas algorithm; `sub[0]` and `sup[last]` are ignored
fn solve_tridiagonal(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];

    c[0] = sup[0] / diag[0];
    d[0] = rhs[0] / diag[0];
    for i in 1..n {
        let denom = diag[i] - sub[i] * c[i - 1];
        c[i] = if i + 1 < n { sup[i] / denom } else { 0.0 };
        d[i] = (rhs[i] - sub[i] * d[i - 1]) / denom;
    }

    let mut out = vec![0.0; n];
    out[n - 1] = d[n - 1];
    for i in (0..n - 1).rev() {
        out[i] = d[i] - c[i] * out[i + 1];
    }
    out
}
