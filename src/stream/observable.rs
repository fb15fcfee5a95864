use std::future::{poll_fn, Future};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::data::RepositoryError;

type BoxedProducer<T> =
    Box<dyn FnOnce(Emitter<T>) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send>;

/// A value delivered to a subscriber.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<T> {
    Next(T),
    /// Terminal. The producer reported a failure.
    Failed(RepositoryError),
    /// Terminal. The producer finished without failing.
    Completed,
}

impl<T> Event<T> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Event::Next(_))
    }
}

/// Producer side of an [`Observable`].
pub struct Emitter<T> {
    tx: mpsc::UnboundedSender<Event<T>>,
}

impl<T> Emitter<T> {
    /// Push a value downstream. Returns `false` once the subscriber is gone,
    /// after which the producer should stop.
    pub fn emit(&self, value: T) -> bool {
        self.tx.send(Event::Next(value)).is_ok()
    }

    /// Terminate the stream with a failure.
    pub fn fail(self, error: RepositoryError) {
        let _ = self.tx.send(Event::Failed(error));
    }
}

/// Lazy, single-subscriber stream of `T`.
pub struct Observable<T> {
    producer: BoxedProducer<T>,
}

impl<T: Send + 'static> Observable<T> {
    pub fn create<F, Fut>(producer: F) -> Self
    where
        F: FnOnce(Emitter<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            producer: Box::new(move |emitter| Box::pin(producer(emitter))),
        }
    }

    pub fn just(value: T) -> Self {
        Self::create(move |emitter| async move {
            emitter.emit(value);
        })
    }

    pub fn from_iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        let values = values.into_iter();
        Self::create(move |emitter| async move {
            for value in values {
                if !emitter.emit(value) {
                    break;
                }
            }
        })
    }

    pub fn empty() -> Self {
        Self::create(|_emitter| async {})
    }

    pub fn fail(error: RepositoryError) -> Self {
        Self::create(move |emitter| async move { emitter.fail(error) })
    }

    pub fn map<U, F>(self, mut f: F) -> Observable<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        self.filter_map(move |value| Some(f(value)))
    }

    /// Re-emit the values for which `f` returns `Some`. Failures pass through.
    pub fn filter_map<U, F>(self, mut f: F) -> Observable<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> Option<U> + Send + 'static,
    {
        Observable::create(move |downstream: Emitter<U>| async move {
            let mut upstream = self.into_stream();
            while let Some(event) = upstream.recv().await {
                match event {
                    Event::Next(value) => {
                        if let Some(mapped) = f(value) {
                            if !downstream.emit(mapped) {
                                break;
                            }
                        }
                    }
                    Event::Failed(error) => {
                        downstream.fail(error);
                        break;
                    }
                    Event::Completed => break,
                }
            }
        })
    }

    /// Start the producer and return the receiving end.
    ///
    /// Must be called from within a tokio runtime.
    pub fn into_stream(self) -> ObservableStream<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        let producer = tokio::spawn((self.producer)(Emitter { tx }));
        ObservableStream {
            rx,
            producer,
            done: false,
        }
    }

    /// Start the producer and deliver every event to `on_event` on a
    /// background task. The last event delivered is always terminal.
    pub fn subscribe<F>(self, mut on_event: F) -> Subscription
    where
        F: FnMut(Event<T>) + Send + 'static,
    {
        let mut stream = self.into_stream();
        let task = tokio::spawn(async move {
            while let Some(event) = stream.recv().await {
                on_event(event);
            }
        });
        Subscription { task: Some(task) }
    }

    /// Resolve to the first value, `None` if the stream completed empty.
    pub async fn first(self) -> Result<Option<T>, RepositoryError> {
        let mut stream = self.into_stream();
        match stream.recv().await {
            Some(Event::Next(value)) => Ok(Some(value)),
            Some(Event::Failed(error)) => Err(error),
            Some(Event::Completed) | None => Ok(None),
        }
    }

    /// Drain the stream until it terminates.
    pub async fn collect(self) -> Result<Vec<T>, RepositoryError> {
        let mut stream = self.into_stream();
        let mut values = Vec::new();
        while let Some(event) = stream.recv().await {
            match event {
                Event::Next(value) => values.push(value),
                Event::Failed(error) => return Err(error),
                Event::Completed => break,
            }
        }
        Ok(values)
    }
}

/// Receiving end of a started [`Observable`]. Dropping it stops the producer.
pub struct ObservableStream<T> {
    rx: mpsc::UnboundedReceiver<Event<T>>,
    producer: JoinHandle<()>,
    done: bool,
}

impl<T> Unpin for ObservableStream<T> {}

impl<T> ObservableStream<T> {
    pub async fn recv(&mut self) -> Option<Event<T>> {
        poll_fn(|cx| Pin::new(&mut *self).poll_next(cx)).await
    }
}

impl<T> Stream for ObservableStream<T> {
    type Item = Event<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Event<T>>> {
        if self.done {
            return Poll::Ready(None);
        }
        match self.rx.poll_recv(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Some(event)) => {
                self.done = event.is_terminal();
                Poll::Ready(Some(event))
            }
            Poll::Ready(None) => {
                self.done = true;
                Poll::Ready(Some(Event::Completed))
            }
        }
    }
}

impl<T> Drop for ObservableStream<T> {
    fn drop(&mut self) {
        self.producer.abort();
    }
}

/// Handle to an active subscription. Dropping it unsubscribes.
pub struct Subscription {
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn unsubscribe(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// True until the stream terminates or the subscription is cancelled.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[tokio::test]
    async fn nothing_runs_until_subscribed() {
        let started = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&started);
        let observable = Observable::create(move |emitter: Emitter<u8>| async move {
            *flag.lock().unwrap() = true;
            emitter.emit(1);
        });
        tokio::task::yield_now().await;
        assert!(!*started.lock().unwrap());

        assert_eq!(observable.first().await, Ok(Some(1)));
        assert!(*started.lock().unwrap());
    }

    #[tokio::test]
    async fn filter_map_drops_rejected_values() {
        let values = Observable::from_iter(vec![1, 2, 3, 4, 5])
            .filter_map(|v| (v % 2 == 0).then_some(v * 10))
            .collect()
            .await;
        assert_eq!(values, Ok(vec![20, 40]));
    }

    #[tokio::test]
    async fn failure_passes_through_operators() {
        let result = Observable::<u8>::fail(RepositoryError::NotFound { id: 7 })
            .map(|v| v + 1)
            .collect()
            .await;
        assert_eq!(result, Err(RepositoryError::NotFound { id: 7 }));
    }

    #[tokio::test]
    async fn stream_ends_with_exactly_one_terminal_event() {
        let mut stream = Observable::just("a").into_stream();
        assert_eq!(stream.recv().await, Some(Event::Next("a")));
        assert_eq!(stream.recv().await, Some(Event::Completed));
        assert_eq!(stream.recv().await, None);
    }

    #[tokio::test]
    async fn failure_is_the_last_event() {
        let mut stream = Observable::<u8>::fail(RepositoryError::NotFound { id: 7 }).into_stream();
        let event = stream.recv().await.unwrap();
        assert!(event.is_terminal());
        assert_eq!(event, Event::Failed(RepositoryError::NotFound { id: 7 }));
        assert_eq!(stream.recv().await, None);
        assert!(!Event::Next(1u8).is_terminal());
    }

    #[tokio::test]
    async fn subscriber_sees_values_then_completion() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let subscription = Observable::from_iter(vec![1, 2]).subscribe(move |event| {
            sink.lock().unwrap().push(event);
        });

        tokio::time::timeout(Duration::from_secs(1), async {
            while subscription.is_active() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Event::Next(1), Event::Next(2), Event::Completed]
        );
    }

    #[tokio::test]
    async fn unsubscribe_stops_delivery() {
        let (gate_tx, gate_rx) = tokio::sync::oneshot::channel::<()>();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut subscription = Observable::create(move |emitter: Emitter<u8>| async move {
            let _ = gate_rx.await;
            emitter.emit(1);
        })
        .subscribe(move |event| sink.lock().unwrap().push(event));

        subscription.unsubscribe();
        let _ = gate_tx.send(());
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(!subscription.is_active());
        assert!(seen.lock().unwrap().is_empty());
    }
}
