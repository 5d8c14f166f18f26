//! WASM bridge for Strive: exposes the tracked transform layer and draggable
//! circles to a JavaScript sketch drawing on a Canvas2D context.
//!
//! Compiled via `wasm-pack build --target web`. The JS side calls
//! `begin_frame`, issues its drawing calls, then `end_frame`, and forwards
//! pointer events to the `handle_pointer_*` methods.

mod canvas;

use canvas::CanvasRenderer;
use strive_core::{
    AngleMode, ColorMode, PointerSample, Rect, SketchConfig, Size, TransformError,
};
use strive_interact::{
    DragState, DraggableId, DraggableSet, DraggableStyle, InputEvent, LockAxis, PointerState,
};
use strive_render::TrackedRenderer;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing sketch controller.
///
/// Owns the tracked renderer, the pointer state and every draggable created
/// from JS. Draggables are addressed by the handle `create_draggable` returns
/// until `remove_draggable` drops them.
#[wasm_bindgen]
pub struct StriveCanvas {
    ctx: TrackedRenderer<CanvasRenderer>,
    pointer: PointerState,
    draggables: DraggableSet,
}

#[wasm_bindgen]
impl StriveCanvas {
    /// Wrap a 2D context whose backing store is `width` × `height`.
    #[wasm_bindgen(constructor)]
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();

        let mut tracked = TrackedRenderer::new(CanvasRenderer::new(ctx, width, height));
        tracked.init();
        Self {
            ctx: tracked,
            pointer: PointerState::new(),
            draggables: DraggableSet::new(),
        }
    }

    /// Apply a JSON sketch config, e.g. `{"coordinate_mode":"left-hand"}`.
    /// Returns `false` and keeps the current config on parse error.
    pub fn set_config(&mut self, json: &str) -> bool {
        match SketchConfig::from_json(json) {
            Ok(config) => {
                self.ctx.apply_config(config);
                true
            }
            Err(err) => {
                log::warn!("invalid sketch config: {err}");
                false
            }
        }
    }

    pub fn get_config(&self) -> String {
        self.ctx.config().to_json()
    }

    /// `"right-hand"` or `"left-hand"`; anything else is ignored.
    pub fn set_coordinate_mode(&mut self, name: &str) {
        self.ctx.set_coordinate_mode_str(name);
    }

    pub fn coordinate_mode(&self) -> String {
        self.ctx.coordinate_mode().as_str().to_string()
    }

    /// `"degrees"` or `"radians"`. Returns `false` for anything else.
    pub fn set_angle_mode(&mut self, name: &str) -> bool {
        match AngleMode::from_name(name) {
            Some(mode) => {
                self.ctx.set_angle_mode(mode);
                true
            }
            None => false,
        }
    }

    /// `"rgb"`, `"hsb"` or `"hsl"`. Saved by `push` and restored by `pop`.
    pub fn set_color_mode(&mut self, name: &str) -> bool {
        match ColorMode::from_name(name) {
            Some(mode) => {
                self.ctx.set_color_mode(mode);
                true
            }
            None => false,
        }
    }

    /// New backing-store size. Picked up by the next frame.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.ctx.inner_mut().resize(width, height);
    }

    // ─── Frame ───────────────────────────────────────────────────────────

    pub fn begin_frame(&mut self) -> Result<(), JsValue> {
        self.ctx.pre_frame().map_err(to_js)
    }

    pub fn end_frame(&mut self) {
        self.ctx.post_frame();
    }

    // ─── Transforms ──────────────────────────────────────────────────────

    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        self.ctx.apply_translate(dx, dy, None).map_err(to_js)
    }

    /// Rotate by `angle` in the sketch's angle mode.
    pub fn rotate(&mut self, angle: f64) -> Result<(), JsValue> {
        self.ctx.apply_rotate(angle, None).map_err(to_js)
    }

    /// Scale by `(sx, sy)`; `sy` defaults to `sx`.
    pub fn scale(&mut self, sx: f64, sy: Option<f64>) -> Result<(), JsValue> {
        self.ctx
            .apply_scale((sx, sy.unwrap_or(sx)))
            .map_err(to_js)
    }

    pub fn push(&mut self) {
        self.ctx.push();
    }

    pub fn pop(&mut self) {
        self.ctx.pop();
    }

    pub fn is_flipped(&self) -> bool {
        self.ctx.is_flipped()
    }

    /// Draw text that reads upright whatever the y direction.
    pub fn text(&mut self, value: &str, x: f64, y: f64) {
        self.ctx.responsive_text(value, x, y);
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// The pointer in the current logical space as JSON `{"x":…,"y":…}`,
    /// or `null` before the first pointer event.
    pub fn mouse(&self) -> Result<String, JsValue> {
        let Some(sample) = self.pointer.sample else {
            return Ok("null".to_string());
        };
        let p = self.ctx.map_pointer(sample).map_err(to_js)?;
        Ok(serde_json::json!({ "x": p.x, "y": p.y }).to_string())
    }

    pub fn mouse_is_pressed(&self) -> bool {
        self.pointer.pressed
    }

    /// Pointer pressed. Client coordinates plus the canvas' bounding rect.
    pub fn handle_pointer_down(
        &mut self,
        client_x: f64,
        client_y: f64,
        rect_left: f64,
        rect_top: f64,
        rect_width: f64,
        rect_height: f64,
    ) {
        let s = self.sample(client_x, client_y, rect_left, rect_top, rect_width, rect_height);
        self.handle_event(InputEvent::from_pointer_down(s.x, s.y));
    }

    pub fn handle_pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        rect_left: f64,
        rect_top: f64,
        rect_width: f64,
        rect_height: f64,
    ) {
        let s = self.sample(client_x, client_y, rect_left, rect_top, rect_width, rect_height);
        self.handle_event(InputEvent::from_pointer_move(s.x, s.y));
    }

    pub fn handle_pointer_up(
        &mut self,
        client_x: f64,
        client_y: f64,
        rect_left: f64,
        rect_top: f64,
        rect_width: f64,
        rect_height: f64,
    ) {
        let s = self.sample(client_x, client_y, rect_left, rect_top, rect_width, rect_height);
        self.handle_event(InputEvent::from_pointer_up(s.x, s.y));
    }

    // ─── Draggables ──────────────────────────────────────────────────────

    /// Create a draggable circle and return its handle. `highlight` is the
    /// CSS fill used while hovered or dragged (default `"red"`).
    pub fn create_draggable(&mut self, x: f64, y: f64, radius: f64, highlight: Option<String>) -> u32 {
        let style = highlight
            .map(|highlight| DraggableStyle { highlight })
            .unwrap_or_default();
        self.draggables.create(x, y, radius, style).raw()
    }

    /// Drop a draggable. A drag it was holding ends immediately. Returns
    /// `false` for an unknown handle.
    pub fn remove_draggable(&mut self, handle: u32) -> bool {
        self.draggables
            .remove(DraggableId::from_raw(handle))
            .is_some()
    }

    /// Pin a draggable on `"x"` or `"y"`. Returns `false` for an unknown
    /// handle or axis.
    pub fn lock_draggable(&mut self, handle: u32, axis: &str, value: f64) -> bool {
        let d = self.draggables.get_mut(DraggableId::from_raw(handle));
        match (d, parse_axis(axis)) {
            (Some(d), Some(axis)) => {
                d.lock(axis, value);
                true
            }
            _ => false,
        }
    }

    pub fn unlock_draggable(&mut self, handle: u32, axis: &str) -> bool {
        let d = self.draggables.get_mut(DraggableId::from_raw(handle));
        match (d, parse_axis(axis)) {
            (Some(d), Some(axis)) => {
                d.unlock(axis);
                true
            }
            _ => false,
        }
    }

    /// Update and draw every draggable in creation order. Call between
    /// `begin_frame` and `end_frame`, after the transforms they live in.
    pub fn update_draggables(&mut self) -> Result<(), JsValue> {
        self.draggables
            .frame(&mut self.ctx, &self.pointer)
            .map_err(to_js)
    }

    /// Positions of all live draggables in creation order, as a flat
    /// `[x0, y0, x1, y1, …]` array.
    pub fn draggable_positions(&self) -> js_sys::Float64Array {
        let flat: Vec<f64> = self
            .draggables
            .iter()
            .flat_map(|d| [d.position().x, d.position().y])
            .collect();
        js_sys::Float64Array::from(flat.as_slice())
    }

    /// `"idle"`, `"hovering"` or `"dragging"`; `None` for an unknown handle.
    pub fn draggable_state(&self, handle: u32) -> Option<String> {
        self.draggables
            .get(DraggableId::from_raw(handle))
            .map(|d| state_name(d.state()).to_string())
    }
}

impl StriveCanvas {
    fn sample(
        &self,
        client_x: f64,
        client_y: f64,
        rect_left: f64,
        rect_top: f64,
        rect_width: f64,
        rect_height: f64,
    ) -> PointerSample {
        let surface = self.ctx.surface();
        PointerSample::from_client(
            (client_x, client_y).into(),
            Rect::new(
                rect_left,
                rect_top,
                rect_left + rect_width,
                rect_top + rect_height,
            ),
            Size::new(surface.width, surface.height),
        )
    }

    fn handle_event(&mut self, event: InputEvent) {
        self.pointer.apply(&event);
        self.draggables.handle_event(&event);
    }
}

fn parse_axis(name: &str) -> Option<LockAxis> {
    match name {
        "x" | "X" => Some(LockAxis::X),
        "y" | "Y" => Some(LockAxis::Y),
        _ => None,
    }
}

fn state_name(state: DragState) -> &'static str {
    match state {
        DragState::Idle => "idle",
        DragState::Hovering => "hovering",
        DragState::Dragging => "dragging",
    }
}

fn to_js(err: TransformError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Strive WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
