/// Natural log of a defined value; undefined in, undefined out.
pub fn opt_ln(v: Option<f64>) -> Option<f64> {
    v.map(f64::ln)
}

/// Apply `f` when both operands are defined
pub fn zip_defined<F>(a: Option<f64>, b: Option<f64>, f: F) -> Option<f64>
where
    F: Fn(f64, f64) -> f64,
{
    match (a, b) {
        (Some(x), Some(y)) => Some(f(x, y)),
        _ => None,
    }
}

/// Element-wise `a - b` over two aligned columns
pub fn column_diff(a: &[Option<f64>], b: &[Option<f64>]) -> Vec<Option<f64>> {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| zip_defined(x, y, |x, y| x - y))
        .collect()
}

/// Replace undefined cells with `fill`
pub fn fill_undefined(values: &[Option<f64>], fill: f64) -> Vec<f64> {
    values.iter().map(|v| v.unwrap_or(fill)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_ln() {
        assert_eq!(opt_ln(None), None);
        assert_eq!(opt_ln(Some(1.0)), Some(0.0));
    }

    #[test]
    fn test_zip_defined() {
        assert_eq!(zip_defined(Some(3.0), Some(1.0), |a, b| a - b), Some(2.0));
        assert_eq!(zip_defined(None, Some(1.0), |a, b| a - b), None);
        assert_eq!(zip_defined(Some(1.0), None, |a, b| a - b), None);
    }

    #[test]
    fn test_column_diff() {
        let a = vec![Some(5.0), None, Some(2.0)];
        let b = vec![Some(1.0), Some(1.0), None];
        assert_eq!(column_diff(&a, &b), vec![Some(4.0), None, None]);
    }

    #[test]
    fn test_fill_undefined() {
        assert_eq!(fill_undefined(&[None, Some(0.5)], 0.0), vec![0.0, 0.5]);
    }
}
