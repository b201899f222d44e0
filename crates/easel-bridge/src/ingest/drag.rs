use crate::coords::Point;
use crate::core::UiCore;
use crate::host::{EventResponse, HostEvent, Target};

use super::{FileBytes, HostFile, ReadError, read_batch};

/// Handles drag-over and drag-leave; returns `None` for other events.
///
/// Pointer position is forwarded on every drag-over wherever the drag is.
/// Only a drag over the surface itself announces the dragged names and
/// suppresses the host's default handling (which would reject the drop).
pub(crate) fn handle_drag<T, C, F>(event: &HostEvent, to_logical: F, core: &mut C) -> Option<EventResponse>
where
    C: UiCore<T> + ?Sized,
    F: Fn(Point) -> Point,
{
    match event {
        HostEvent::DragOver { client, target, names } => {
            let position = to_logical(*client);
            core.mouse_move(position.x, position.y);

            if !target.is_surface() {
                return Some(EventResponse::PASS);
            }
            core.on_drag_over(names.clone());
            Some(EventResponse::PREVENT)
        }
        HostEvent::DragLeave => {
            core.on_drag_leave();
            Some(EventResponse::PASS)
        }
        _ => None,
    }
}

/// Files dropped onto the surface, waiting to be read.
pub struct DropBatch {
    names: Vec<String>,
    files: Vec<Box<dyn HostFile>>,
}

impl DropBatch {
    /// Accepts a drop if it landed on the surface element.
    ///
    /// Names are fixed here, before any read starts, so delivery order is
    /// drop order.
    pub fn accept(target: Target, files: Vec<Box<dyn HostFile>>) -> Option<Self> {
        if !target.is_surface() {
            return None;
        }
        let names = files.iter().map(|f| f.display_name()).collect();
        Some(Self { names, files })
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Reads every file and returns the parallel `(names, contents)` pair.
    pub async fn read(self) -> (Vec<String>, Vec<Result<FileBytes, ReadError>>) {
        let contents = read_batch(self.files)
            .await
            .into_iter()
            .map(|outcome| outcome.map(|file| file.data))
            .collect();
        (self.names, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ReadFuture;
    use crate::test_support::{Call, RecordingCore};

    struct Memory(&'static str, &'static [u8]);

    impl HostFile for Memory {
        fn name(&self) -> String {
            self.0.to_string()
        }

        fn read(&self) -> ReadFuture {
            let bytes = self.1.to_vec();
            Box::pin(async move { Ok(bytes) })
        }
    }

    fn drag_over(target: Target) -> HostEvent {
        HostEvent::DragOver {
            client: Point::new(10.0, 20.0),
            target,
            names: vec!["a.txt".into()],
        }
    }

    #[test]
    fn drag_elsewhere_only_moves() {
        let mut core = RecordingCore::default();
        let response = handle_drag::<(), _, _>(&drag_over(Target::Elsewhere), |p| p, &mut core);
        assert_eq!(response, Some(EventResponse::PASS));
        assert_eq!(core.calls, vec![Call::MouseMove(10.0, 20.0)]);
    }

    #[test]
    fn drag_over_surface_announces_names() {
        let mut core = RecordingCore::default();
        let response = handle_drag::<(), _, _>(&drag_over(Target::Surface), |p| p * 0.5, &mut core);
        assert_eq!(response, Some(EventResponse::PREVENT));
        assert_eq!(
            core.calls,
            vec![Call::MouseMove(5.0, 10.0), Call::DragOver(vec!["a.txt".into()])]
        );
    }

    #[test]
    fn drag_leave_is_forwarded() {
        let mut core = RecordingCore::default();
        handle_drag::<(), _, _>(&HostEvent::DragLeave, |p| p, &mut core);
        assert_eq!(core.calls, vec![Call::DragLeave]);
    }

    #[test]
    fn drop_elsewhere_is_rejected() {
        let files: Vec<Box<dyn HostFile>> = vec![Box::new(Memory("a", b"1"))];
        assert!(DropBatch::accept(Target::Elsewhere, files).is_none());
    }

    #[test]
    fn drop_on_surface_reads_in_order() {
        let files: Vec<Box<dyn HostFile>> = vec![
            Box::new(Memory("A", b"aaa")),
            Box::new(Memory("B", b"bb")),
            Box::new(Memory("C", b"c")),
        ];
        let batch = DropBatch::accept(Target::Surface, files).unwrap();
        assert_eq!(batch.names(), ["A", "B", "C"]);

        let (names, contents) = pollster::block_on(batch.read());
        assert_eq!(names.len(), contents.len());
        let bytes: Vec<&[u8]> = contents.iter().map(|c| &**c.as_ref().unwrap()).collect();
        assert_eq!(bytes, vec![&b"aaa"[..], &b"bb"[..], &b"c"[..]]);
    }
}
