//! # Host locals
//!
//! Widgets do not hold a reference to the host. The parameters they need from
//! it are thread‑local “locals”, pushed by the host around each frame or
//! event:
//!
//! - `Viewport`: drawable area size in pixels; its height drives the
//!   top‑origin → bottom‑origin flip.
//! - `UiScale`: logical → screen multiplier (host UI scale times the
//!   panel's own scale, see `Preferences::effective_scale`).
//!
//! ```rust
//! use overlay_core::*;
//!
//! let vp = Viewport { width: 800.0, height: 500.0 };
//! let flipped = with_viewport(vp, || flip_y(viewport().height, 10.0));
//! assert_eq!(flipped, 490.0);
//! ```
//!
//! Outside any `with_*` frame the getters return defaults: an empty viewport
//! and identity scale.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// Size of the host region widgets are drawn into.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiScale(pub f32);

impl Default for UiScale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Convenience: scale a logical scalar by the current `UiScale`.
pub fn scaled(v: f32) -> f32 {
    v * ui_scale().0
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

fn get_local<T: Copy + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

pub fn with_viewport<R>(viewport: Viewport, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Viewport>(), Box::new(viewport));
        f()
    })
}

pub fn with_ui_scale<R>(scale: UiScale, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<UiScale>(), Box::new(scale));
        f()
    })
}

pub fn viewport() -> Viewport {
    get_local::<Viewport>()
}

pub fn ui_scale() -> UiScale {
    get_local::<UiScale>()
}
