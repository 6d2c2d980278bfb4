//! FileReader 封装模块
//!
//! 把选中的图片读成 data URL 用于预览。

use wasm_bindgen::prelude::*;

/// 异步读取文件内容为 data URL，完成后调用 `on_load`。
/// 读取失败只记录日志，预览区保持原状。
pub fn read_as_data_url(file: &web_sys::File, on_load: impl Fn(String) + 'static) {
    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(err) => {
            log::warn!("FileReader unavailable: {:?}", err);
            return;
        }
    };

    let reader_handle = reader.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        if let Ok(result) = reader_handle.result() {
            if let Some(url) = result.as_string() {
                on_load(url);
            }
        }
    });

    reader.set_onloadend(Some(closure.as_ref().unchecked_ref()));
    if let Err(err) = reader.read_as_data_url(file) {
        log::warn!("read_as_data_url failed: {:?}", err);
    }

    // 泄漏闭包：回调触发前 reader 必须保持存活
    closure.forget();
}
