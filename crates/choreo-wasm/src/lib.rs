use choreo_core::{
    FrameLoop, Framebuffer, RenderSurface, SectionId, Signal, Simulation, ViewportClass,
};
use wasm_bindgen::prelude::*;

/// Browser-facing handle: one frame loop plus the RGBA surface it draws into.
///
/// JS wires scroll, pointer and resize events to the setters, calls `tick`
/// from `requestAnimationFrame`, and uploads `frame_ptr`/`frame_byte_length`
/// into an `ImageData`.
#[wasm_bindgen]
pub struct ChoreoWorld {
    frame_loop: FrameLoop,
    framebuffer: Framebuffer,
    attached: bool,
}

#[wasm_bindgen]
impl ChoreoWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f32) -> ChoreoWorld {
        let profile = ViewportClass::from_width(viewport_width).profile();
        web_sys::console::log_1(
            &format!(
                "WASM ChoreoWorld created: {} particles, {} viewport",
                profile.particle_count, profile.class
            )
            .into(),
        );

        ChoreoWorld {
            frame_loop: FrameLoop::new(Simulation::new(profile)),
            framebuffer: Framebuffer::square(profile.canvas_size),
            attached: true,
        }
    }

    /// Run one animation frame. Returns the time spent in milliseconds.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> f32 {
        let start = js_sys::Date::now();
        let surface: &mut dyn RenderSurface = &mut self.framebuffer;
        self.frame_loop.tick(Some(surface));
        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn frame_ptr(&self) -> *const u8 {
        self.framebuffer.as_bytes().as_ptr()
    }

    #[wasm_bindgen]
    pub fn frame_byte_length(&self) -> usize {
        self.framebuffer.as_bytes().len()
    }

    #[wasm_bindgen]
    pub fn frame_width(&self) -> u32 {
        self.framebuffer.width()
    }

    #[wasm_bindgen]
    pub fn frame_height(&self) -> u32 {
        self.framebuffer.height()
    }

    /// Report the visible page section. Unknown ids are ignored.
    #[wasm_bindgen]
    pub fn set_section(&mut self, section: &str) {
        match section.parse::<SectionId>() {
            Ok(id) => self.frame_loop.enqueue(Signal::Section(id)),
            Err(e) => web_sys::console::warn_1(&format!("{e}").into()),
        }
    }

    /// Pointer position relative to the surface centre, in surface pixels.
    #[wasm_bindgen]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.frame_loop
            .enqueue(Signal::PointerMove(glam::Vec2::new(x, y)));
    }

    #[wasm_bindgen]
    pub fn set_hover(&mut self, hovering: bool) {
        self.frame_loop.enqueue(Signal::Hover(hovering));
    }

    /// New viewport width. Crossing the mobile breakpoint resizes an attached
    /// surface right away; the swarm is rebuilt on the next tick.
    #[wasm_bindgen]
    pub fn resize_viewport(&mut self, width: f32) {
        self.frame_loop.enqueue(Signal::ViewportWidth(width));
        let canvas = ViewportClass::from_width(width).profile().canvas_size;
        if self.attached && canvas != self.framebuffer.width() {
            self.framebuffer.resize(canvas, canvas);
        }
    }

    /// Drop the surface, e.g. while the canvas is off-screen. Frames are
    /// skipped without advancing until it is attached again.
    #[wasm_bindgen]
    pub fn detach_surface(&mut self) {
        self.attached = false;
        self.framebuffer.resize(0, 0);
    }

    #[wasm_bindgen]
    pub fn attach_surface(&mut self) {
        self.attached = true;
        let canvas = self.frame_loop.simulation().profile().canvas_size;
        self.framebuffer.resize(canvas, canvas);
    }

    /// Left edge of the surface, in viewport pixels, for CSS positioning.
    #[wasm_bindgen]
    pub fn anchor_offset(&self, viewport_width: f32) -> f32 {
        self.frame_loop.anchor_offset(viewport_width)
    }

    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.frame_loop.start();
    }

    #[wasm_bindgen]
    pub fn stop(&mut self) {
        self.frame_loop.stop();
    }

    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.frame_loop.simulation().particles.count
    }

    #[wasm_bindgen]
    pub fn active_shape(&self) -> String {
        self.frame_loop.simulation().active_shape().to_string()
    }
}
