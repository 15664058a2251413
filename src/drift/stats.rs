use std::cmp::Ordering;

/// Result of a two-sample Kolmogorov-Smirnov test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsTest {
    /// Supremum of the absolute difference between the two empirical CDFs.
    pub statistic: f64,
    /// Probability of a statistic at least this large under the null
    /// hypothesis that both samples come from the same distribution.
    pub p_value: f64,
}

/// Run a two-sample Kolmogorov-Smirnov test.
///
/// The statistic is D = sup |F_a(x) - F_b(x)| over the merged sample, computed
/// with a two-pointer sweep over both sorted samples. The p-value is the
/// asymptotic Kolmogorov survival function evaluated at
/// lambda = (sqrt(m) + 0.12 + 0.11 / sqrt(m)) * D with m = n_a * n_b / (n_a + n_b),
/// the small-sample adjustment of Stephens (1970).
///
/// Values are ordered with `total_cmp`, so NaN cells sort last and compare
/// equal to each other; two samples with missing values in the same proportion
/// do not register a difference from the missing values alone. Both samples
/// must be non-empty.
pub fn ks_2samp(a: &[f64], b: &[f64]) -> KsTest {
    assert!(!a.is_empty() && !b.is_empty(), "Samples must be non-empty");

    let mut x = a.to_vec();
    let mut y = b.to_vec();
    x.sort_unstable_by(f64::total_cmp);
    y.sort_unstable_by(f64::total_cmp);

    let n = x.len();
    let m = y.len();
    let mut i = 0;
    let mut j = 0;
    let mut statistic: f64 = 0.0;
    while i < n && j < m {
        // Step both ECDFs past the smaller of the two current values; ties are
        // consumed on both sides before the difference is evaluated.
        let v = match x[i].total_cmp(&y[j]) {
            Ordering::Greater => y[j],
            _ => x[i],
        };
        while i < n && x[i].total_cmp(&v) != Ordering::Greater {
            i += 1;
        }
        while j < m && y[j].total_cmp(&v) != Ordering::Greater {
            j += 1;
        }
        let diff = (i as f64 / n as f64 - j as f64 / m as f64).abs();
        if diff > statistic {
            statistic = diff;
        }
    }

    let effective_n = (n as f64 * m as f64) / ((n + m) as f64);
    let sqrt_en = effective_n.sqrt();
    let lambda = (sqrt_en + 0.12 + 0.11 / sqrt_en) * statistic;
    KsTest {
        statistic,
        p_value: kolmogorov_survival(lambda),
    }
}

/// Survival function of the Kolmogorov distribution,
/// Q(lambda) = 2 * sum_{j=1..inf} (-1)^(j-1) * exp(-2 * j^2 * lambda^2).
///
/// The alternating series is summed until a term is negligible relative to the
/// previous term or to the running sum; if it has not converged after 100
/// terms lambda is so small that Q is 1 to working precision.
fn kolmogorov_survival(lambda: f64) -> f64 {
    const EPS1: f64 = 1e-3;
    const EPS2: f64 = 1e-10;

    if lambda <= 0.0 {
        return 1.0;
    }
    let a2 = -2.0 * lambda * lambda;
    let mut fac = 2.0;
    let mut sum = 0.0;
    let mut previous_term = 0.0;
    for j in 1..=100 {
        let term = fac * (a2 * (j * j) as f64).exp();
        sum += term;
        if term.abs() <= EPS1 * previous_term || term.abs() <= EPS2 * sum {
            return sum.clamp(0.0, 1.0);
        }
        fac = -fac;
        previous_term = term.abs();
    }
    1.0
}
