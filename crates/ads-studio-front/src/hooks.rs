use std::cell::{Ref, RefCell};
use std::rc::Rc;
use yew::prelude::*;

/// Mutable state shared between a component and its async tasks.
///
/// Unlike `use_state`, updates always apply to the latest value, so two
/// fetches resolving back to back cannot overwrite each other. Equality is
/// identity: pass snapshots (`get().clone()`) to child props.
pub struct SharedState<T> {
    inner: Rc<RefCell<T>>,
    refresh: Callback<()>,
}

impl<T> Clone for SharedState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

impl<T> PartialEq for SharedState<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> SharedState<T> {
    pub fn detached(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
            refresh: Callback::noop(),
        }
    }

    pub fn get(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Mutates the value and schedules a re-render of the owning component.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.inner.borrow_mut());
        self.refresh.emit(());
        result
    }
}

#[hook]
pub fn use_shared<T, F>(init: F) -> SharedState<T>
where
    T: 'static,
    F: FnOnce() -> T,
{
    let inner = use_mut_ref(init);
    let force = use_force_update();
    let refresh = use_callback((), move |_: (), _| force.force_update());
    SharedState { inner, refresh }
}
