//! 浏览器控制台日志
//!
//! 将 `log` 门面的记录转发到 `console.log` / `console.warn` / `console.error`，
//! 非 wasm 目标（例如宿主机上的 `cargo check`）退化为 stderr。

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(target_arch = "wasm32")]
use log::Level;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(msg: &str);
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(msg: &str);
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(msg: &str);
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = format!("[{}] {}", record.target(), record.args());

        #[cfg(target_arch = "wasm32")]
        match record.level() {
            Level::Error => console_error(&msg),
            Level::Warn => console_warn(&msg),
            _ => console_log(&msg),
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::{self, Write};
            let _ = writeln!(io::stderr(), "{} {}", record.level(), msg);
        }
    }

    fn flush(&self) {}
}

/// 安装控制台日志；debug 构建输出 Debug 级别，release 构建输出 Info 级别
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
