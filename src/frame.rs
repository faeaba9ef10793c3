use crate::core::{Simulation, StreakMark};
use crate::render::CanvasRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub renderer: CanvasRenderer,
    pub marks: Vec<StreakMark>,
}

impl FrameContext {
    /// One update + draw cycle; scheduled once per display refresh. Nothing
    /// in here blocks or suspends.
    pub fn frame(&mut self) {
        let mut sim = self.sim.borrow_mut();
        sim.step();
        sim.marks(&mut self.marks);
        let screen = sim.screen();
        drop(sim);
        self.renderer.draw(screen.width, screen.height, &self.marks);
    }
}

pub fn start_loop(frame_ctx: FrameContext) {
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
