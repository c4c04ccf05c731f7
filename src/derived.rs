// SPDX-License-Identifier: MPL-2.0
//! Read-only values computed from source stores.
//!
//! A [`Derived`] value recomputes synchronously whenever one of its inputs
//! changes and notifies its own subscribers in turn. It cannot be written
//! directly; the compute closure must be a pure function of the inputs.

use std::rc::Rc;

use crate::store::{Store, Subscription};

/// Read-only reactive value derived from two source stores.
pub struct Derived<T> {
    output: Store<T>,
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            output: self.output.clone(),
        }
    }
}

impl<T: Clone + 'static> Derived<T> {
    /// Combines two stores through `compute`, recomputing on every change
    /// of either input. The wiring lives as long as the input stores.
    pub fn zip<A, B>(a: &Store<A>, b: &Store<B>, compute: impl Fn(&A, &B) -> T + 'static) -> Self
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        let output = Store::new(compute(&a.get(), &b.get()));
        let compute = Rc::new(compute);

        let other = b.clone();
        let out = output.clone();
        let recompute = Rc::clone(&compute);
        drop(a.subscribe(move |a_value| out.set(recompute(a_value, &other.get()))));

        let other = a.clone();
        let out = output.clone();
        let recompute = Rc::clone(&compute);
        drop(b.subscribe(move |b_value| out.set(recompute(&other.get(), b_value))));

        Self { output }
    }

    /// Returns a clone of the current derived value.
    #[must_use]
    pub fn get(&self) -> T {
        self.output.get()
    }

    /// Registers `callback`, invoked immediately with the current value and
    /// again after every recomputation. Same lifecycle rules as
    /// [`Store::subscribe`].
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.output.subscribe(callback)
    }
}
