use gradfill_engine::control::{NoOutputs, OutputNotifier, StandardControl};
use gradfill_engine::dom::ElementRef;
use gradfill_engine::host::Context;
use gradfill_engine::id::ControlId;
use gradfill_svg::Svg;

use super::frame::ControlFrame;
use crate::markup;
use crate::params::ControlParams;
use crate::stops::collect_stops;

/// A rectangle or circle filled with a linear or radial gradient.
///
/// Parameters are cached across updates (see [`ControlParams`]). A render
/// happens only once the bound data set has finished loading and holds at
/// least one record; otherwise the previous markup stays on screen.
///
/// # Example
/// ```rust
/// use gradfill_ui::prelude::*;
///
/// let mut session = Session::new(GradientFill::new());
/// let mut ctx = Context::default();
/// session.mount(&mut ctx);
/// assert!(session.markup().contains("linearGradient"));
/// ```
#[derive(Default)]
pub struct GradientFill {
    /// Id to use at init instead of a freshly generated one.
    preset_id: Option<ControlId>,
    frame: Option<ControlFrame>,
    params: ControlParams,
    last_render: Option<Svg>,
    notify_output_changed: Option<OutputNotifier>,
}

impl GradientFill {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `id` at init instead of generating one.
    pub fn with_id(id: ControlId) -> Self {
        Self { preset_id: Some(id), ..Self::default() }
    }

    /// The instance id; `None` before init and after destroy.
    pub fn id(&self) -> Option<&ControlId> {
        self.frame.as_ref().map(|f| &f.id)
    }

    pub fn params(&self) -> &ControlParams {
        &self.params
    }

    /// The tree behind the current markup; `None` while the placeholder shows.
    pub fn last_render(&self) -> Option<&Svg> {
        self.last_render.as_ref()
    }

    pub fn main_container(&self) -> Option<ElementRef> {
        self.frame.as_ref().map(ControlFrame::main_container)
    }

    pub fn svg_container(&self) -> Option<ElementRef> {
        self.frame.as_ref().map(ControlFrame::svg_container)
    }

    /// Current markup of the svg container.
    pub fn markup(&self) -> Option<String> {
        self.svg_container().map(|el| el.borrow().inner_markup())
    }
}

impl std::fmt::Debug for GradientFill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientFill")
            .field("frame", &self.frame)
            .field("params", &self.params)
            .field("rendered", &self.last_render.is_some())
            .finish_non_exhaustive()
    }
}

impl StandardControl for GradientFill {
    type Outputs = NoOutputs;

    fn init(&mut self, context: &mut Context, notify_output_changed: OutputNotifier, container: &ElementRef) {
        let id = self.preset_id.take().unwrap_or_else(ControlId::generate);
        log::debug!("GradientFill: init {id}");
        self.frame = Some(ControlFrame::mount(id, context, container));
        self.notify_output_changed = Some(notify_output_changed);
    }

    fn update_view(&mut self, context: &Context) {
        let Some(frame) = &self.frame else {
            log::warn!("GradientFill: update_view without init; ignored");
            return;
        };

        self.params.merge_from(&context.parameters);

        let data = context.data_set();
        if data.loading {
            log::trace!("GradientFill {}: data set loading; render skipped", frame.id);
            return;
        }
        if data.is_empty() {
            log::trace!("GradientFill {}: no color stops; render skipped", frame.id);
            return;
        }

        let stops = match collect_stops(data) {
            Ok(stops) if stops.is_empty() => {
                log::trace!("GradientFill {}: no resolvable color stops; render skipped", frame.id);
                return;
            }
            Ok(stops) => stops,
            Err(e) => {
                log::warn!("GradientFill {}: {e}; keeping previous markup", frame.id);
                return;
            }
        };

        let svg = markup::build(&frame.id, &self.params, stops);
        frame.render(&svg);
        log::debug!(
            "GradientFill {}: rendered {:?} {:?} {}x{} with {} stops",
            frame.id,
            self.params.shape(),
            self.params.gradient(),
            self.params.width(),
            self.params.height(),
            svg.defs.gradients.first().map_or(0, |g| g.stops().len()),
        );
        self.last_render = Some(svg);
    }

    fn outputs(&mut self) -> NoOutputs {
        NoOutputs
    }

    fn destroy(&mut self) {
        if let Some(frame) = self.frame.take() {
            log::debug!("GradientFill: destroy {}", frame.id);
        }
        self.notify_output_changed = None;
        self.last_render = None;
    }
}
