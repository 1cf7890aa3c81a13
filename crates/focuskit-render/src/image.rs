use std::rc::Rc;

use focuskit_core::{
    Canvas, Coordinates, Drawable, DrawableId, HorizontalAlignment, LayoutError, MeasuredSize,
    Paddings, ResourceProvider, TraceEvent, VerticalAlignment,
};

use crate::position::{horizontal_position, vertical_position};
use crate::{LayoutInputs, LayoutRenderer, RenderContext};

/// How a drawable fills the declared icon box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleType {
    /// Stretched to the box; the intrinsic size is ignored.
    #[default]
    FitXy,
    /// Largest aspect-preserving fit.
    FitCenter,
    /// Like `FitCenter`, but never enlarged.
    CenterInside,
    /// Intrinsic size, unscaled.
    Center,
}

impl ScaleType {
    fn content_size(self, box_size: MeasuredSize, intrinsic: Option<MeasuredSize>) -> MeasuredSize {
        let Some(natural) = intrinsic.filter(|s| s.width > 0 && s.height > 0) else {
            return box_size;
        };
        let fit = || {
            (box_size.width as f32 / natural.width as f32)
                .min(box_size.height as f32 / natural.height as f32)
        };
        let scaled = |scale: f32| {
            MeasuredSize::new(
                (natural.width as f32 * scale).round() as i32,
                (natural.height as f32 * scale).round() as i32,
            )
        };
        match self {
            ScaleType::FitXy => box_size,
            ScaleType::FitCenter => scaled(fit()),
            ScaleType::CenterInside => scaled(fit().min(1.0)),
            ScaleType::Center => natural,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageState {
    pub focused_resource: Option<DrawableId>,
    pub unfocused_resource: Option<DrawableId>,
    pub paddings: Paddings,
    pub is_focused: bool,
    pub vertical_alignment: VerticalAlignment,
    pub horizontal_alignment: HorizontalAlignment,
    pub scale_type: ScaleType,
}

impl ImageState {
    /// Icon for the current focus, falling back to the other one.
    pub fn resolved_resource(&self) -> Option<DrawableId> {
        if self.is_focused {
            self.focused_resource.or(self.unfocused_resource)
        } else {
            self.unfocused_resource.or(self.focused_resource)
        }
    }

    fn needs_reload(&self, old: &ImageState) -> bool {
        self.focused_resource != old.focused_resource
            || self.unfocused_resource != old.unfocused_resource
            || self.is_focused != old.is_focused
    }
}

/// Focus-dependent icon placed inside its parent by alignment and paddings.
pub struct ImageRenderer {
    ctx: RenderContext,
    resources: Rc<dyn ResourceProvider>,
    state: ImageState,
    drawable: Option<Drawable>,
    /// Drawable size from the last measure, paddings excluded.
    content: MeasuredSize,
    layout: LayoutInputs,
    coordinates: Coordinates,
}

impl ImageRenderer {
    pub fn new(ctx: RenderContext, resources: Rc<dyn ResourceProvider>, state: ImageState) -> Self {
        let mut renderer = Self {
            ctx,
            resources,
            state,
            drawable: None,
            content: MeasuredSize::default(),
            layout: LayoutInputs::default(),
            coordinates: Coordinates::default(),
        };
        renderer.load_drawable();
        renderer
    }

    /// The currently loaded icon, if any.
    pub fn drawable(&self) -> Option<&Drawable> {
        self.drawable.as_ref()
    }

    /// Moves the icon inside `bounds` without measuring again. `bounds` may
    /// start at a negative origin, as an inflated background does.
    pub fn place_in(&mut self, bounds: Coordinates) {
        if self.drawable.is_none() {
            return;
        }
        let x = bounds.left
            + horizontal_position(
                bounds.width(),
                self.content.width,
                self.state.horizontal_alignment,
                &self.state.paddings,
            );
        let y = bounds.top
            + vertical_position(
                bounds.height(),
                self.content.height,
                self.state.vertical_alignment,
                &self.state.paddings,
            );
        self.coordinates = Coordinates::from_origin(x, y, self.content.width, self.content.height);
    }

    fn load_drawable(&mut self) {
        let Some(id) = self.state.resolved_resource() else {
            self.drawable = None;
            return;
        };
        match self.resources.load_drawable(id) {
            Ok(drawable) => {
                log::trace!("image: loaded `{id}`");
                self.ctx.tracer.emit(|| TraceEvent::DrawableLoaded { id });
                self.drawable = Some(drawable);
            }
            Err(err) => {
                log::warn!("image: {err}");
                self.ctx.tracer.emit(|| TraceEvent::DrawableLoadFailed {
                    id,
                    reason: err.to_string(),
                });
                self.drawable = None;
            }
        }
    }
}

impl LayoutRenderer for ImageRenderer {
    type State = ImageState;

    fn name(&self) -> &'static str {
        "image"
    }

    fn state(&self) -> ImageState {
        self.state.clone()
    }

    fn update_state<F>(&mut self, f: F)
    where
        F: FnOnce(ImageState) -> ImageState,
    {
        let next = f(self.state.clone());
        if next == self.state {
            return;
        }
        let old = std::mem::replace(&mut self.state, next);
        self.ctx
            .tracer
            .emit(|| TraceEvent::StateChanged { renderer: "image" });
        if self.state.needs_reload(&old) {
            self.load_drawable();
        }
        self.ctx.invalidate();
    }

    fn measure(
        &mut self,
        desired_width: i32,
        desired_height: i32,
        parent_width: i32,
        parent_height: i32,
    ) -> Result<MeasuredSize, LayoutError> {
        self.layout = LayoutInputs {
            desired_width,
            desired_height,
            parent_width,
            parent_height,
        };
        let paddings = self.state.paddings;

        let size = match self.drawable.map(|d| d.intrinsic) {
            None => {
                self.content = MeasuredSize::default();
                self.coordinates = Coordinates::default();
                MeasuredSize::new(paddings.horizontal(), paddings.vertical())
            }
            Some(intrinsic) => {
                self.content = self.state.scale_type.content_size(
                    MeasuredSize::new(desired_width, desired_height),
                    intrinsic,
                );
                self.place_in(Coordinates::new(0, 0, parent_width, parent_height));
                MeasuredSize::new(
                    self.content.width + paddings.horizontal(),
                    self.content.height + paddings.vertical(),
                )
            }
        };

        self.ctx.tracer.emit(|| TraceEvent::Measured {
            renderer: "image",
            size,
        });
        Ok(size)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let Some(drawable) = &self.drawable else {
            return;
        };
        canvas.draw_drawable(drawable, self.coordinates.to_rect());
        self.ctx.tracer.emit(|| TraceEvent::Drawn {
            renderer: "image",
            coordinates: self.coordinates,
        });
    }

    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}
