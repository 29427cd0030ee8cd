//! One-shot effect queue shared by the view models

use std::sync::Mutex;

use tokio::sync::mpsc;

pub(crate) struct EffectQueue<E> {
    tx: mpsc::UnboundedSender<E>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<E>>>,
}

impl<E> EffectQueue<E> {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Queue an effect. Dropped silently once the receiver is gone.
    pub(crate) fn emit(&self, effect: E) {
        let _ = self.tx.send(effect);
    }

    /// Take the receiver (can only be called once)
    pub(crate) fn take_receiver(&self) -> Option<mpsc::UnboundedReceiver<E>> {
        self.rx.lock().ok()?.take()
    }
}
