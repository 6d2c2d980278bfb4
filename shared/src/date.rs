//! 日期工具
//!
//! 后端以 `YYYY-MM-DD` 传输日期（HTML `<input type="date">` 的取值格式），
//! 界面按俄语习惯显示为 `DD.MM.YYYY`。

use chrono::NaiveDate;

/// 线上传输格式
pub const WIRE_FORMAT: &str = "%Y-%m-%d";
/// 界面显示格式
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// 解析线上日期字符串
pub fn parse_wire(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, WIRE_FORMAT).ok()
}

/// 把线上日期转为显示格式。
/// 无法解析的输入原样返回，避免坏数据把整个列表渲染挂掉。
pub fn format_display(value: &str) -> String {
    match parse_wire(value) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_date_formats_for_display() {
        assert_eq!(format_display("1969-07-16"), "16.07.1969");
        assert_eq!(format_display("2026-01-02"), "02.01.2026");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_display(""), "");
        assert_eq!(format_display("вчера"), "вчера");
        assert_eq!(format_display("1969-13-40"), "1969-13-40");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_wire("1969-07-16").is_some());
        assert!(parse_wire("16.07.1969").is_none());
    }
}
