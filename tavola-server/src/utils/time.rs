//! 时间工具函数
//!
//! 所有时间戳统一为 Unix millis (`i64`)，repository 层只接收毫秒值。

/// 当前 Unix 时间戳 (毫秒)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
