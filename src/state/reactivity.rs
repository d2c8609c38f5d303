// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================
// Dos tipos de contenedor, intencionadamente distintos:
// - ReactiveValue: celda con "replay" (los listados toleran suscriptores
//   tardíos, que reciben el último valor al suscribirse).
// - Broadcast: emisión one-shot sin valor retenido (el detalle de una ropa
//   es una emisión por navegación; quien llega tarde no la recibe).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Celda reactiva con valor actual. Los suscriptores nuevos son notificados
/// inmediatamente con el último valor y después en cada actualización.
///
/// Los clones comparten tanto el valor como la lista de suscriptores, por lo
/// que un store puede repartir handles entre páginas sin perder notificaciones.
/// La escritura (`set`) es interna al crate: el único camino de escritura de
/// cada celda es la operación del store que la posee.
pub struct ReactiveValue<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback<T>>>>,
}

impl<T> ReactiveValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copia del valor actual.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Suscribirse a cambios. El callback se invoca inmediatamente con el
    /// valor actual y después en cada `set`.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
        T: Clone,
    {
        let callback: Callback<T> = Rc::new(callback);
        // Copia del valor: el callback puede escribir en esta misma celda.
        let value = self.value.borrow().clone();
        callback(&value);
        self.subscribers.borrow_mut().push(callback);
    }

    /// Establecer nuevo valor y notificar a todos los suscriptores.
    pub(crate) fn set(&self, new_value: T)
    where
        T: Clone,
    {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    fn notify(&self)
    where
        T: Clone,
    {
        // Copias de callbacks y valor antes de iterar: un suscriptor puede
        // suscribirse o escribir en esta misma celda durante la notificación,
        // así que no se mantiene ningún borrow mientras corren los callbacks.
        let callbacks: Vec<Callback<T>> = self.subscribers.borrow().clone();
        let value = self.value.borrow().clone();
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl<T> Clone for ReactiveValue<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

/// Canal de emisión one-shot: no retiene valor. `emit` notifica solo a los
/// suscriptores registrados en ese momento; los tardíos no reciben nada.
pub struct Broadcast<T> {
    subscribers: Rc<RefCell<Vec<Callback<T>>>>,
}

impl<T> Broadcast<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub(crate) fn emit(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback(value);
        }
    }
}

impl<T> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
        }
    }
}

/// Secuencia monótona de peticiones de un store. Cada operación de carga
/// toma un token con `begin()`; al llegar la respuesta se comprueba con
/// `is_current()` y las respuestas de peticiones superadas se descartan.
/// Gana el orden de emisión de las peticiones, no el orden de llegada.
#[derive(Clone)]
pub struct RequestSeq {
    counter: Rc<Cell<u64>>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self {
            counter: Rc::new(Cell::new(0)),
        }
    }

    /// Emitir un nuevo token, invalidando los anteriores.
    pub fn begin(&self) -> u64 {
        let token = self.counter.get() + 1;
        self.counter.set(token);
        token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.counter.get() == token
    }
}

impl Default for RequestSeq {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_replays_current_value() {
        let cell = ReactiveValue::new(7u32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        cell.subscribe(move |v| sink.borrow_mut().push(*v));

        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn set_notifies_every_subscriber() {
        let cell = ReactiveValue::new(0u32);
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(RefCell::new(Vec::new()));

        let sink = seen_a.clone();
        cell.subscribe(move |v| sink.borrow_mut().push(*v));
        let sink = seen_b.clone();
        cell.subscribe(move |v| sink.borrow_mut().push(*v));

        cell.set(1);
        cell.set(2);

        assert_eq!(*seen_a.borrow(), vec![0, 1, 2]);
        assert_eq!(*seen_b.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let cell = ReactiveValue::new(String::from("a"));
        let clone = cell.clone();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        clone.subscribe(move |v: &String| sink.borrow_mut().push(v.clone()));

        cell.set("b".to_string());

        assert_eq!(clone.get(), "b");
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn a_subscriber_may_write_back_during_notification() {
        let cell = ReactiveValue::new(0u32);

        // Un suscriptor que reacciona a una emisión escribiendo en la misma
        // celda (p. ej. un suscriptor del rol que hace logout) no debe
        // reventar la notificación.
        let writer = cell.clone();
        cell.subscribe(move |v| {
            if *v == 1 {
                writer.set(2);
            }
        });

        cell.set(1);

        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn broadcast_does_not_replay_to_late_subscribers() {
        let channel = Broadcast::new();
        let early = Rc::new(RefCell::new(Vec::new()));

        let sink = early.clone();
        channel.subscribe(move |v: &u32| sink.borrow_mut().push(*v));

        channel.emit(&42);

        let late = Rc::new(RefCell::new(Vec::new()));
        let sink = late.clone();
        channel.subscribe(move |v: &u32| sink.borrow_mut().push(*v));

        assert_eq!(*early.borrow(), vec![42]);
        assert!(late.borrow().is_empty());
    }

    #[test]
    fn stale_tokens_are_rejected() {
        let seq = RequestSeq::new();

        let first = seq.begin();
        let second = seq.begin();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
