//! # 工具函数模块
//!
//! 提供美化输出、进度条和数值格式化工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, progress

pub mod output;
pub mod progress;

/// 数值的简洁文本形式（整数不带小数点），用于文件名和标题
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(300.0), "300");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(format_number(0.25), "0.25");
    }
}
