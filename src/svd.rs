//! Truncated SVD and relevance scoring.

use ndarray::{Array1, Array2, Axis};
use ndarray_linalg::SVD;

use crate::error::{Error, Result};

/// `A ~= U * diag(sigma) * V^T`, truncated to the effective rank `k =
/// sigma.len() = min(rows, cols)`. The matrix is small and dense (built
/// from a 0/1 incidence table), so a LAPACK-backed dense SVD is plenty for
/// the sizes this core is expected to see.
pub struct SvdResult {
    pub u: Array2<f64>,
    pub sigma: Array1<f64>,
    pub v: Array2<f64>,
}

pub fn truncated_svd(a: &Array2<f64>) -> Result<SvdResult> {
    let (u, sigma, vt) = a
        .svd(true, true)
        .map_err(|e| Error::NumericFailure(e.to_string()))?;
    let u = u.expect("calc_u was requested");
    let vt = vt.expect("calc_vt was requested");

    let k = sigma.len();
    let u = u.slice(ndarray::s![.., 0..k]).to_owned();
    let v = vt.slice(ndarray::s![0..k, ..]).t().to_owned();

    Ok(SvdResult { u, sigma, v })
}

/// `threshold = sigma[0] / 2`; advance while `sigma[index] >= threshold`
/// and `index < k - 1`. The returned bound is inclusive and deliberately
/// one index past the last value that clears the threshold; preserve
/// this off-by-one, it is load-bearing.
pub fn select_relevant_singular_values(sigma: &Array1<f64>) -> usize {
    let k = sigma.len();
    if k == 0 {
        return 0;
    }
    let threshold = sigma[0] / 2.0;
    let mut index = 0;
    while index < k - 1 && sigma[index] >= threshold {
        index += 1;
    }
    index
}

/// `score(row) = sqrt(sum_{i=0}^{upto} M[row, i]^2 * sigma[i]^2)`.
pub fn row_scores(m: &Array2<f64>, sigma: &Array1<f64>, upto: usize) -> Array1<f64> {
    let cols = (upto + 1).min(m.ncols()).min(sigma.len());
    let mut scores = Array1::<f64>::zeros(m.nrows());
    for (row_idx, row) in m.axis_iter(Axis(0)).enumerate() {
        let mut acc = 0.0;
        for i in 0..cols {
            acc += row[i] * row[i] * sigma[i] * sigma[i];
        }
        scores[row_idx] = acc.sqrt();
    }
    scores
}

/// Divides by the row maximum; emits all zeros rather than dividing by
/// zero if every score is zero.
pub fn normalize(scores: &Array1<f64>) -> Array1<f64> {
    let max = scores.iter().cloned().fold(0.0_f64, f64::max);
    if max == 0.0 {
        Array1::zeros(scores.len())
    } else {
        scores / max
    }
}
