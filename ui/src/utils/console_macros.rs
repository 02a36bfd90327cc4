/// Macros for properly formatted console logging
/// These macros wrap gloo_console functions and handle formatting properly
/// to prevent BigInt serialization issues in WASM environments.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}
