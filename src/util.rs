// Console helpers and small formatting utilities
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn price_keeps_two_decimals() {
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(349), "$3.49");
        assert_eq!(format_price(1205), "$12.05");
    }
}
