use crate::constants::*;
use crate::core::content::Content;
use crate::core::form::ContactForm;
use crate::core::markup;
use crate::core::panel::{Ephemeral, PanelId};
use crate::core::scene::{
    Layout, SceneFrame, ShardStyle, Visibility, DECORATIVE_SHARDS, PANEL_PLACEMENTS,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the scene: one element per shard plus the hero block.
pub struct Stage {
    document: web::Document,
    stage: web::HtmlElement,
    hero: web::HtmlElement,
    watermark: Option<web::HtmlElement>,
    decorative: Vec<web::HtmlElement>,
    panels: Vec<web::HtmlElement>,
    bodies: Vec<web::HtmlElement>,
    layout: Option<Layout>,
}

fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create_element: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

impl Stage {
    pub fn build(document: &web::Document, content: &Content) -> anyhow::Result<Self> {
        let stage: web::HtmlElement = dom::element_by_id(document, STAGE_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", STAGE_ID))?;
        let scene: web::HtmlElement = dom::element_by_id(document, SCENE_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", SCENE_ID))?;
        let hero: web::HtmlElement = dom::element_by_id(document, HERO_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", HERO_ID))?;
        let watermark = dom::element_by_id(document, WATERMARK_ID);
        hero.set_inner_html(&markup::hero(&content.identity));

        let mut decorative = Vec::with_capacity(DECORATIVE_SHARDS.len());
        for d in DECORATIVE_SHARDS.iter() {
            let el = create_div(document, &format!("shard decor glass {}", d.shape.css_class()))?;
            _ = scene.append_child(&el);
            decorative.push(el);
        }

        let mut panels = Vec::with_capacity(PANEL_PLACEMENTS.len());
        let mut bodies = Vec::with_capacity(PANEL_PLACEMENTS.len());
        for p in PANEL_PLACEMENTS.iter() {
            let el = create_div(document, &format!("shard panel glass {}", p.shape.css_class()))?;
            _ = el.set_attribute(ACTION_ATTR, "open");
            _ = el.set_attribute(PANEL_ATTR, p.id.as_str());
            let face = create_div(document, "panel-face-wrap")?;
            face.set_inner_html(&markup::panel_face(p.id));
            let body = create_div(document, "panel-body")?;
            _ = el.append_child(&face);
            _ = el.append_child(&body);
            _ = scene.append_child(&el);
            panels.push(el);
            bodies.push(body);
        }
        log::info!(
            "[stage] built {} decorative shards, {} panels",
            decorative.len(),
            panels.len()
        );

        Ok(Self {
            document: document.clone(),
            stage,
            hero,
            watermark,
            decorative,
            panels,
            bodies,
            layout: None,
        })
    }

    pub fn root(&self) -> &web::HtmlElement {
        &self.stage
    }

    pub fn apply(&mut self, frame: &SceneFrame) {
        let relayout = self.layout != Some(frame.layout);
        for ((el, style), d) in self
            .decorative
            .iter()
            .zip(frame.decorative.iter())
            .zip(DECORATIVE_SHARDS.iter())
        {
            apply_style(el, style);
            if relayout {
                set_size(el, d.size.px(frame.layout));
            }
        }
        for ((el, style), p) in self
            .panels
            .iter()
            .zip(frame.panels.iter())
            .zip(PANEL_PLACEMENTS.iter())
        {
            apply_style(el, style);
            if relayout {
                set_size(el, p.size.px(frame.layout));
            }
        }
        self.layout = Some(frame.layout);

        dom::set_style(
            &self.hero,
            "transform",
            &format!(
                "translate({:.1}px, {:.1}px)",
                frame.hero.offset.x, frame.hero.offset.y
            ),
        );
        dom::toggle_class(&self.hero, "is-receded", frame.hero.receded);
        if let Some(w) = &self.watermark {
            dom::toggle_class(w, "is-hidden", frame.hero.receded);
        }
        dom::toggle_class(&self.stage, STAGE_FOCUSED_CLASS, frame.hero.receded);
    }

    pub fn open(&self, id: PanelId, content: &Content, eph: &Ephemeral) {
        if let Some(body) = self.bodies.get(id.index()) {
            body.set_inner_html(&markup::panel_body(id, content, eph, current_year()));
            body.set_scroll_top(0);
        }
    }

    pub fn close(&self, id: PanelId) {
        if let Some(body) = self.bodies.get(id.index()) {
            body.set_inner_html("");
        }
    }

    /// Re-render only the project grid (category bar + cards).
    pub fn refresh_projects(&self, content: &Content, eph: &Ephemeral) {
        let Some(body) = self.bodies.get(PanelId::Projects.index()) else {
            return;
        };
        if let Ok(Some(grid)) = body.query_selector(".projects") {
            grid.set_outer_html(&markup::projects_grid(content, eph.filter.selected()));
        }
    }

    pub fn sync_form(&self, form: &ContactForm) {
        let disabled = !form.inputs_enabled();
        if let Some(input) =
            dom::element_by_id::<web::HtmlInputElement>(&self.document, CONTACT_NAME_ID)
        {
            if input.value() != form.name() {
                input.set_value(form.name());
            }
            input.set_disabled(disabled);
        }
        if let Some(area) =
            dom::element_by_id::<web::HtmlTextAreaElement>(&self.document, CONTACT_MESSAGE_ID)
        {
            if area.value() != form.message() {
                area.set_value(form.message());
            }
            area.set_disabled(disabled);
        }
        if let Some(button) =
            dom::element_by_id::<web::HtmlButtonElement>(&self.document, CONTACT_SUBMIT_ID)
        {
            let (label, class) = markup::submit_state(form);
            button.set_text_content(Some(label));
            button.set_class_name(class);
            button.set_disabled(disabled);
        }
    }

    pub fn sync_copy(&self, copied: bool) {
        if let Some(el) = self.document.get_element_by_id(COPY_STATE_ID) {
            el.set_class_name(&format!("icon {}", markup::copy_icon(copied)));
        }
    }
}

fn apply_style(el: &web::HtmlElement, style: &ShardStyle) {
    dom::set_style(el, "transform", &style.css_transform());
    dom::set_style(el, "transition", &style.css_transition());
    for v in [Visibility::Resting, Visibility::Expanded, Visibility::Receded] {
        dom::toggle_class(el, v.css_class(), v == style.visibility);
    }
}

fn set_size(el: &web::HtmlElement, [w, h]: [f32; 2]) {
    dom::set_style(el, "width", &format!("{}px", w));
    dom::set_style(el, "height", &format!("{}px", h));
}

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
