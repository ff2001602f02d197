//! # 二分法求根
//!
//! 在区间 [x_min, x_max] 内寻找 |f(x)| ≤ tolerance 的点。
//!
//! ## 算法
//! 1. 取中点 mid
//! 2. 预处理：若左右两个半区间都满足变号条件，则移向右半区间，
//!    重复直到条件不再同时成立
//! 3. 标准二分，直到 |f(mid)| ≤ tolerance；两个半区间都不变号时失败
//!
//! 迭代次数有上限，区间收缩到相邻浮点数仍未收敛时同样报告失败。
//!
//! ## 依赖关系
//! - 被 `physics/critical.rs` 调用

use thiserror::Error;

/// 求根失败原因
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BisectionError {
    #[error("no sign change in [{x_min}, {x_max}]")]
    NotBracketed { x_min: f64, x_max: f64 },

    #[error("iteration limit {iterations} reached, last estimate {estimate}")]
    IterationLimit { iterations: usize, estimate: f64 },

    #[error("bracket collapsed at {estimate} with residual {residual:e}")]
    Stalled { estimate: f64, residual: f64 },
}

/// 二分法求根器
#[derive(Debug, Clone, Copy)]
pub struct Bisection {
    /// |f(x)| 的收敛容差
    pub tolerance: f64,
    /// 最大迭代次数（包括预处理步骤）
    pub max_iterations: usize,
}

impl Default for Bisection {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 500,
        }
    }
}

impl Bisection {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// 寻找 f 在 [x_min, x_max] 内的零点
    pub fn find_root<F>(&self, f: F, x_min: f64, x_max: f64) -> Result<f64, BisectionError>
    where
        F: Fn(f64) -> f64,
    {
        let (mut lo, mut hi) = (x_min, x_max);
        let mut f_lo = f(lo);
        let mut f_hi = f(hi);
        let mut mid = (lo + hi) / 2.0;
        let mut f_mid = f(mid);
        let mut iterations = 0;

        // 两个半区间都变号时偏向右半区间
        while f_lo * f_mid <= 0.0 && f_hi * f_mid <= 0.0 {
            if iterations >= self.max_iterations {
                return Err(BisectionError::IterationLimit {
                    iterations,
                    estimate: mid,
                });
            }
            let next = (mid + hi) / 2.0;
            if next == mid || next == hi {
                break;
            }
            lo = mid;
            f_lo = f_mid;
            mid = next;
            f_mid = f(mid);
            iterations += 1;
        }

        while f_mid.abs() > self.tolerance {
            if iterations >= self.max_iterations {
                return Err(BisectionError::IterationLimit {
                    iterations,
                    estimate: mid,
                });
            }

            if f_lo * f_mid <= 0.0 {
                hi = mid;
                f_hi = f_mid;
            } else if f_hi * f_mid <= 0.0 {
                lo = mid;
                f_lo = f_mid;
            } else {
                return Err(BisectionError::NotBracketed {
                    x_min: lo,
                    x_max: hi,
                });
            }

            let next = (lo + hi) / 2.0;
            if next == lo || next == hi {
                return Err(BisectionError::Stalled {
                    estimate: mid,
                    residual: f_mid,
                });
            }
            mid = next;
            f_mid = f(mid);
            iterations += 1;
        }

        Ok(mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_root() {
        let solver = Bisection::new(1e-10, 500);
        let root = solver.find_root(|x| x - 3.7, 0.0, 10.0).unwrap();
        assert!((root - 3.7).abs() <= 1e-10);
    }

    #[test]
    fn test_decreasing_function() {
        let solver = Bisection::default();
        let root = solver.find_root(|x| 2.0 - x.ln(), 1.0, 20.0).unwrap();
        assert!((2.0 - root.ln()).abs() <= 1e-12);
        assert!((root - 2.0_f64.exp()).abs() < 1e-9);
    }

    #[test]
    fn test_no_sign_change() {
        let solver = Bisection::default();
        let err = solver.find_root(|x| x * x + 1.0, 0.0, 10.0).unwrap_err();
        assert!(matches!(err, BisectionError::NotBracketed { .. }));
    }

    #[test]
    fn test_prefers_right_half_when_both_bracket() {
        // 区间两端同号、中点异号：左右半区间都"变号"，应收敛到右侧的根
        let solver = Bisection::new(1e-10, 500);
        let root = solver
            .find_root(|x| (x - 1.0) * (x - 3.0), 0.0, 4.0)
            .unwrap();
        assert!((root - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_root_at_midpoint() {
        // f(mid) = 0 时预处理会右移，最终仍收敛回根
        let solver = Bisection::new(1e-10, 500);
        let root = solver.find_root(|x| x - 5.0, 0.0, 10.0).unwrap();
        assert!((root - 5.0).abs() <= 1e-10);
    }

    #[test]
    fn test_iteration_limit() {
        let solver = Bisection::new(1e-15, 5);
        let err = solver.find_root(|x| x - 3.3, 0.0, 10.0).unwrap_err();
        assert!(matches!(
            err,
            BisectionError::IterationLimit { iterations: 5, .. }
        ));
    }

    #[test]
    fn test_unreachable_tolerance_stalls() {
        // 容差小于浮点分辨率时，区间收缩后报告失败而不是死循环
        let solver = Bisection::new(0.0, 10_000);
        let err = solver
            .find_root(|x| x * x - 2.0, 0.0, 2.0)
            .unwrap_err();
        assert!(matches!(err, BisectionError::Stalled { .. }));
    }
}
