mod controls;
mod pointer;

pub use controls::wire_controls;
pub use pointer::{wire_input_handlers, InputWiring};

use geometry_core::{AppEvent, Camera, Explorer};
use std::cell::RefCell;
use std::rc::Rc;

/// Feed one event through the explorer reducer in place.
pub fn dispatch(explorer: &Rc<RefCell<Explorer>>, camera: &Rc<RefCell<Camera>>, event: AppEvent) {
    let camera = camera.borrow();
    let mut state = explorer.borrow_mut();
    let current = std::mem::take(&mut *state);
    *state = current.apply(&event, &*camera);
}
