//! Browser app: wires the upload controller to the page.

use std::cell::RefCell;
use std::rc::Rc;

use clique_viz_core::{Scene, UploadController, ViewState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::api;
use crate::markup::{
    ANSWER_ID, CANVAS_ID, FILE_INPUT_ID, HIDDEN_CLASS, RESET_ID, RESULT_PANE_ID, SVG_NS,
    TRIGGER_ID, UPLOAD_PANE_HTML, UPLOAD_PANE_ID,
};

/// Page elements the app touches.
struct Dom {
    document: Document,
    upload_pane: HtmlElement,
    result_pane: HtmlElement,
    answer: HtmlElement,
    canvas: Element,
    file_input: HtmlInputElement,
    trigger: HtmlButtonElement,
    reset: HtmlElement,
}

impl Dom {
    fn lookup(document: Document) -> Result<Self, JsValue> {
        let upload_pane: HtmlElement = by_id(&document, UPLOAD_PANE_ID)?;
        // The form lives in the upload panel; it must exist before the lookups below.
        upload_pane.set_inner_html(UPLOAD_PANE_HTML);

        Ok(Self {
            result_pane: by_id(&document, RESULT_PANE_ID)?,
            answer: by_id(&document, ANSWER_ID)?,
            canvas: by_id(&document, CANVAS_ID)?,
            file_input: by_id(&document, FILE_INPUT_ID)?,
            trigger: by_id(&document, TRIGGER_ID)?,
            reset: by_id(&document, RESET_ID)?,
            upload_pane,
            document,
        })
    }
}

/// All front end state.
pub struct App {
    controller: UploadController,
    dom: Dom,
}

impl App {
    /// Build the upload form, attach handlers and show the initial view.
    pub fn mount(document: Document) -> Result<Rc<RefCell<Self>>, JsValue> {
        let app = Rc::new(RefCell::new(Self {
            controller: UploadController::new(),
            dom: Dom::lookup(document)?,
        }));

        let on_trigger = {
            let app = Rc::clone(&app);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_| trigger(Rc::clone(&app)))
        };
        let on_reset = {
            let app = Rc::clone(&app);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_| reset(&app))
        };

        {
            let this = app.borrow();
            this.dom
                .trigger
                .set_onclick(Some(on_trigger.as_ref().unchecked_ref()));
            this.dom
                .reset
                .set_onclick(Some(on_reset.as_ref().unchecked_ref()));
            this.render()?;
        }
        // Handlers live as long as the page.
        on_trigger.forget();
        on_reset.forget();

        Ok(app)
    }

    /// Show the panel matching the current view.
    fn render(&self) -> Result<(), JsValue> {
        let dom = &self.dom;
        dom.trigger.set_disabled(self.controller.is_in_flight());

        match self.controller.view() {
            ViewState::Upload => {
                dom.canvas.set_inner_html("");
                dom.result_pane.class_list().add_1(HIDDEN_CLASS)?;
                dom.upload_pane.class_list().remove_1(HIDDEN_CLASS)?;
            }
            ViewState::Result {
                answer,
                scene,
                message,
            } => {
                dom.upload_pane.class_list().add_1(HIDDEN_CLASS)?;
                draw(&dom.document, &dom.canvas, scene)?;
                dom.answer.set_text_content(Some(answer));
                if let Some(message) = message {
                    web_sys::console::warn_1(&format!("solver: {}", message).into());
                }
                dom.result_pane.class_list().remove_1(HIDDEN_CLASS)?;
            }
        }
        Ok(())
    }
}

fn trigger(app: Rc<RefCell<App>>) {
    let request = {
        let mut this = app.borrow_mut();
        let selected = this.dom.file_input.files().and_then(|files| files.get(0));
        let request = this.controller.trigger(selected);
        this.dom.trigger.set_disabled(this.controller.is_in_flight());
        request
    };
    let Some(request) = request else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = api::upload(&request).await;

        let mut this = app.borrow_mut();
        match result {
            Ok(body) => {
                if let Err(e) = this.controller.complete(&body) {
                    web_sys::console::error_1(&e.to_string().into());
                }
            }
            Err(e) => {
                web_sys::console::error_1(&e.clone().into());
                this.controller.fail(&e);
            }
        }
        if let Err(e) = this.render() {
            web_sys::console::error_1(&e);
        }
    });
}

fn reset(app: &Rc<RefCell<App>>) {
    let reloaded = web_sys::window()
        .map(|w| w.location().reload().is_ok())
        .unwrap_or(false);
    if reloaded {
        return;
    }

    let mut this = app.borrow_mut();
    this.controller.reset();
    if let Err(e) = this.render() {
        web_sys::console::error_1(&e);
    }
}

/// Replace the canvas contents with `scene`.
fn draw(document: &Document, canvas: &Element, scene: &Scene) -> Result<(), JsValue> {
    canvas.set_inner_html("");

    for line in &scene.lines {
        let el = svg_elem(
            document,
            "line",
            &[
                ("x1", line.start.x.to_string()),
                ("y1", line.start.y.to_string()),
                ("x2", line.end.x.to_string()),
                ("y2", line.end.y.to_string()),
            ],
        )?;
        canvas.append_child(&el)?;
    }

    for vertex in &scene.vertices {
        let (x, y) = (vertex.center.x.to_string(), vertex.center.y.to_string());
        let group = svg_elem(document, "g", &[])?;

        let circle = svg_elem(
            document,
            "circle",
            &[
                ("cx", x.clone()),
                ("cy", y.clone()),
                ("r", vertex.radius.to_string()),
            ],
        )?;
        if let Some(class) = vertex.class() {
            circle.set_attribute("class", class)?;
        }

        let label = svg_elem(document, "text", &[("x", x), ("y", y)])?;
        label.set_text_content(Some(&vertex.label()));

        group.append_child(&circle)?;
        group.append_child(&label)?;
        canvas.append_child(&group)?;
    }
    Ok(())
}

fn svg_elem(document: &Document, tag: &str, attrs: &[(&str, String)]) -> Result<Element, JsValue> {
    let el = document.create_element_ns(Some(SVG_NS), tag)?;
    for (name, value) in attrs {
        el.set_attribute(name, value)?;
    }
    Ok(el)
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("unexpected element type for #{}", id)))
}
