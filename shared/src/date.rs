//! 行程日期模块
//!
//! 后端可能返回纯日期 (`2025-01-01`)、无时区的日期时间或 RFC 3339 时间戳。
//! `TripDate` 原样保存传输值，只在展示时归一化为 `YYYY-MM-DD`。

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 行程日期（传输值）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripDate(String);

impl TripDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// 原始字符串
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// 解析为日历日期
    ///
    /// 返回 None 如果不是可识别的日期格式
    pub fn parse(&self) -> Option<NaiveDate> {
        let raw = self.0.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Some(date);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.date_naive())
    }

    /// 展示用字符串：能解析则输出 `YYYY-MM-DD`，否则原样返回
    pub fn display(&self) -> String {
        match self.parse() {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for TripDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date_is_kept() {
        assert_eq!(TripDate::new("2025-01-01").display(), "2025-01-01");
    }

    #[test]
    fn test_datetime_is_truncated_to_date() {
        assert_eq!(TripDate::new("2025-01-01T23:10:00").display(), "2025-01-01");
        assert_eq!(
            TripDate::new("2025-01-01T23:10:00.250").display(),
            "2025-01-01"
        );
        assert_eq!(
            TripDate::new("2025-06-30T08:00:00+02:00").display(),
            "2025-06-30"
        );
    }

    #[test]
    fn test_unparseable_date_is_shown_verbatim() {
        let date = TripDate::new("next tuesday");
        assert_eq!(date.parse(), None);
        assert_eq!(date.to_string(), "next tuesday");
    }
}
