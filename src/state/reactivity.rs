// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor Y subscribers: un clon capturado por un
/// future notifica a quien se suscribió en el original.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Leer el valor sin clonar
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar con closure; sólo notifica si la closure devuelve `true`
    pub fn update_if<F>(&self, updater: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        let changed = updater(&mut self.value.borrow_mut());
        if changed {
            self.notify();
        }
        changed
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self) {
        // Copia de la lista: un callback puede suscribir a otro sin pánico de RefCell
        let callbacks: Vec<Callback> = self.subscribers.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    /// Snapshot del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(1);
        let hits = Rc::new(Cell::new(0));
        let hits_cb = hits.clone();
        state.subscribe(move || hits_cb.set(hits_cb.get() + 1));

        let clone = state.clone();
        clone.set(5);

        assert_eq!(state.get(), 5);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn update_if_only_notifies_on_change() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));
        let hits_cb = hits.clone();
        state.subscribe(move || hits_cb.set(hits_cb.get() + 1));

        assert!(!state.update_if(|_| false));
        assert!(state.update_if(|v| {
            *v += 1;
            true
        }));

        assert_eq!(hits.get(), 1);
        assert_eq!(state.get(), 1);
    }

    #[test]
    fn subscriber_may_subscribe_during_notify() {
        let state = ReactiveState::new(0);
        let inner = state.clone();
        state.subscribe(move || inner.subscribe(|| {}));
        state.set(1);
        assert_eq!(state.subscriber_count(), 2);
    }
}
