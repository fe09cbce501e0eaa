use gradfill_engine::control::{NoOutputs, OutputNotifier, StandardControl};
use gradfill_engine::dom::ElementRef;
use gradfill_engine::host::Context;
use gradfill_engine::id::ControlId;

use super::frame::ControlFrame;

/// Radial gradient control.
///
/// Initializes exactly like [`GradientFill`](super::GradientFill), placeholder
/// included, but has no update logic: bound data and parameters are never
/// reflected and the placeholder stays for the control's whole life.
#[derive(Default)]
pub struct RadialGradientFill {
    preset_id: Option<ControlId>,
    frame: Option<ControlFrame>,
    notify_output_changed: Option<OutputNotifier>,
}

impl RadialGradientFill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: ControlId) -> Self {
        Self { preset_id: Some(id), ..Self::default() }
    }

    pub fn id(&self) -> Option<&ControlId> {
        self.frame.as_ref().map(|f| &f.id)
    }

    pub fn svg_container(&self) -> Option<ElementRef> {
        self.frame.as_ref().map(ControlFrame::svg_container)
    }

    pub fn markup(&self) -> Option<String> {
        self.svg_container().map(|el| el.borrow().inner_markup())
    }
}

impl std::fmt::Debug for RadialGradientFill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadialGradientFill").field("frame", &self.frame).finish_non_exhaustive()
    }
}

impl StandardControl for RadialGradientFill {
    type Outputs = NoOutputs;

    fn init(&mut self, context: &mut Context, notify_output_changed: OutputNotifier, container: &ElementRef) {
        let id = self.preset_id.take().unwrap_or_else(ControlId::generate);
        log::debug!("RadialGradientFill: init {id}");
        self.frame = Some(ControlFrame::mount(id, context, container));
        self.notify_output_changed = Some(notify_output_changed);
    }

    fn update_view(&mut self, _context: &Context) {
        // This control has no update logic; the placeholder stays.
        log::trace!("RadialGradientFill: update_view is a no-op");
    }

    fn outputs(&mut self) -> NoOutputs {
        NoOutputs
    }

    fn destroy(&mut self) {
        self.frame = None;
        self.notify_output_changed = None;
    }
}
