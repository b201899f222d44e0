use easel_bridge::ingest::{HostFile, ReadFuture};
use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

use crate::error::js_error;

/// A browser `File` handle, read through `Blob.arrayBuffer()`.
pub struct WebFile {
    file: File,
}

impl WebFile {
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

impl HostFile for WebFile {
    fn name(&self) -> String {
        self.file.name()
    }

    fn relative_path(&self) -> Option<String> {
        // Set for directory selections only; not exposed by web-sys.
        Reflect::get(&self.file, &JsValue::from_str("webkitRelativePath"))
            .ok()
            .and_then(|value| value.as_string())
            .filter(|path| !path.is_empty())
    }

    fn read(&self) -> ReadFuture {
        let pending = JsFuture::from(self.file.array_buffer());
        Box::pin(async move {
            let buffer = pending.await.map_err(js_error)?;
            Ok(Uint8Array::new(&buffer).to_vec())
        })
    }
}

pub(crate) fn from_list(list: Option<FileList>) -> Vec<Box<dyn HostFile>> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| Box::new(WebFile::new(file)) as Box<dyn HostFile>)
        .collect()
}
