use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

enum Slot<F: Future> {
    Pending(Pin<Box<F>>),
    Done(Option<F::Output>),
}

/// Future that polls a set of futures until all of them complete.
///
/// Outputs are returned in the order the futures were supplied. Join, not
/// race: a slow future delays the whole set, never the other way round.
pub struct JoinAll<F: Future> {
    slots: Vec<Slot<F>>,
}

// Slots are boxed; nothing is pinned in place inside `JoinAll` itself.
impl<F: Future> Unpin for JoinAll<F> {}

/// Joins `futures`, preserving input order in the output.
pub fn join_all<I>(futures: I) -> JoinAll<I::Item>
where
    I: IntoIterator,
    I::Item: Future,
{
    JoinAll {
        slots: futures.into_iter().map(|f| Slot::Pending(Box::pin(f))).collect(),
    }
}

impl<F: Future> Future for JoinAll<F> {
    type Output = Vec<F::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let mut all_done = true;

        for slot in this.slots.iter_mut() {
            if let Slot::Pending(fut) = slot {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(out) => *slot = Slot::Done(Some(out)),
                    Poll::Pending => all_done = false,
                }
            }
        }

        if !all_done {
            return Poll::Pending;
        }

        let outputs = this
            .slots
            .iter_mut()
            .filter_map(|slot| match slot {
                Slot::Done(out) => out.take(),
                Slot::Pending(_) => None,
            })
            .collect();
        Poll::Ready(outputs)
    }
}
