//! Control lifecycle contract.
//!
//! The host drives every control through the same four entry points, always
//! sequentially on one thread:
//!
//! 1. [`StandardControl::init`] once, with the container to render into.
//! 2. [`StandardControl::update_view`] whenever any input changes.
//! 3. [`StandardControl::outputs`] before the host reads bound outputs.
//! 4. [`StandardControl::destroy`] once, before the container is discarded.

use crate::dom::ElementRef;
use crate::host::Context;

/// Callback a control invokes to tell the host new outputs are ready.
pub type OutputNotifier = Box<dyn FnMut()>;

/// Output bag for controls that expose no bindable outputs.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct NoOutputs;

/// The contract every hosted control implements.
pub trait StandardControl {
    /// Values the host reads back after [`outputs`](Self::outputs).
    type Outputs;

    /// Builds the control's elements inside `container`.
    ///
    /// Bound data is not available yet; it arrives with the first
    /// [`update_view`](Self::update_view).
    fn init(&mut self, context: &mut Context, notify_output_changed: OutputNotifier, container: &ElementRef);

    /// Called when any value in the property bag has changed, including the
    /// bound data set and the container size.
    fn update_view(&mut self, context: &Context);

    /// Called by the host before it reads bound outputs.
    fn outputs(&mut self) -> Self::Outputs;

    /// Called before the control is removed. Release held references here.
    fn destroy(&mut self) {}
}
