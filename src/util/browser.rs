//! Browser dialogs and file input reading.
//!
//! Requires a browser environment; native builds no-op (`confirm` answers
//! `false`, file inputs yield nothing).

use crate::net::transport::FileUpload;

/// A file picked in an `<input type="file">`, not yet read.
#[cfg(feature = "csr")]
pub type FileHandle = web_sys::File;

/// Native stand-in; no file can be picked outside the browser.
#[cfg(not(feature = "csr"))]
#[derive(Clone, Debug)]
pub struct FileHandle;

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Files chosen in the input that fired `ev`.
pub fn selected_files(ev: &leptos::ev::Event) -> Vec<FileHandle> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return Vec::new();
        };
        let Some(list) = input.files() else {
            return Vec::new();
        };
        (0..list.length()).filter_map(|i| list.get(i)).collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        Vec::new()
    }
}

/// Read chosen files into memory for a multipart upload.
///
/// Files that fail to read are logged and skipped.
#[allow(clippy::unused_async)]
pub async fn read_files(files: Vec<FileHandle>) -> Vec<FileUpload> {
    #[cfg(feature = "csr")]
    {
        let mut out = Vec::with_capacity(files.len());
        for file in files {
            match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
                Ok(buffer) => out.push(FileUpload {
                    file_name: file.name(),
                    content_type: file.type_(),
                    bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
                }),
                Err(e) => log::warn!("failed to read {}: {e:?}", file.name()),
            }
        }
        out
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = files;
        Vec::new()
    }
}
