use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::join_all;

/// Immutable file contents.
pub type FileBytes = Arc<[u8]>;

/// Pending read of one host file.
pub type ReadFuture = Pin<Box<dyn Future<Output = anyhow::Result<Vec<u8>>> + 'static>>;

/// Per-file ingestion result.
pub type FileOutcome = Result<IngestedFile, ReadError>;

/// A file whose bytes have been fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedFile {
    /// Relative path for directory-scoped selections, bare file name otherwise.
    pub name: String,
    pub data: FileBytes,
}

/// A single file of a batch failed to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    pub name: String,
    pub message: String,
}

impl ReadError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read '{}': {}", self.name, self.message)
    }
}

impl std::error::Error for ReadError {}

/// A file handle owned by the host, not yet read.
pub trait HostFile {
    /// Bare file name.
    fn name(&self) -> String;

    /// Path relative to the selected directory, when the selection was
    /// directory-scoped. Empty strings count as absent.
    fn relative_path(&self) -> Option<String> {
        None
    }

    /// Starts reading the full contents.
    fn read(&self) -> ReadFuture;

    /// Name delivered to the UI core.
    fn display_name(&self) -> String {
        match self.relative_path() {
            Some(path) if !path.is_empty() => path,
            _ => self.name(),
        }
    }
}

/// Reads every file concurrently; resolves once all reads finish.
///
/// Output order is input order regardless of completion order. A failed read
/// produces an `Err` in its own slot and leaves its siblings untouched.
pub async fn read_batch(files: Vec<Box<dyn HostFile>>) -> Vec<FileOutcome> {
    let reads = files.into_iter().map(|file| {
        let name = file.display_name();
        let pending = file.read();
        async move {
            match pending.await {
                Ok(bytes) => Ok(IngestedFile {
                    name,
                    data: bytes.into(),
                }),
                Err(err) => {
                    log::warn!("failed to read '{name}': {err:#}");
                    Err(ReadError::new(name, format!("{err:#}")))
                }
            }
        }
    });

    join_all(reads).await
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named {
        name: &'static str,
        relative: Option<&'static str>,
        bytes: Option<&'static [u8]>,
    }

    impl HostFile for Named {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn relative_path(&self) -> Option<String> {
            self.relative.map(str::to_string)
        }

        fn read(&self) -> ReadFuture {
            let bytes = self.bytes;
            Box::pin(async move {
                bytes.map(<[u8]>::to_vec).ok_or_else(|| anyhow::anyhow!("permission denied"))
            })
        }
    }

    fn file(name: &'static str, bytes: Option<&'static [u8]>) -> Box<dyn HostFile> {
        Box::new(Named { name, relative: None, bytes })
    }

    #[test]
    fn display_name_prefers_relative_path() {
        let f = Named { name: "a.txt", relative: Some("dir/a.txt"), bytes: None };
        assert_eq!(f.display_name(), "dir/a.txt");

        let f = Named { name: "a.txt", relative: Some(""), bytes: None };
        assert_eq!(f.display_name(), "a.txt");

        let f = Named { name: "a.txt", relative: None, bytes: None };
        assert_eq!(f.display_name(), "a.txt");
    }

    #[test]
    fn batch_keeps_order_and_isolates_failures() {
        let files = vec![
            file("a", Some(b"alpha")),
            file("b", None),
            file("c", Some(b"gamma")),
        ];

        let out = pollster::block_on(read_batch(files));

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].as_ref().unwrap().name, "a");
        assert_eq!(&*out[0].as_ref().unwrap().data, b"alpha");
        assert_eq!(out[1], Err(ReadError::new("b", "permission denied")));
        assert_eq!(&*out[2].as_ref().unwrap().data, b"gamma");
    }

    #[test]
    fn empty_batch_resolves_immediately() {
        assert!(pollster::block_on(read_batch(Vec::new())).is_empty());
    }

    #[test]
    fn read_error_display() {
        let err = ReadError::new("photo.png", "aborted");
        assert_eq!(err.to_string(), "failed to read 'photo.png': aborted");
    }
}
