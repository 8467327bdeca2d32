/// Host page wiring.
///
/// Element ids and data attributes the wasm side expects in `index.html`.
pub const CANVAS_ID: &str = "prism-canvas";
pub const STAGE_ID: &str = "stage";
pub const SCENE_ID: &str = "scene";
pub const HERO_ID: &str = "hero";
pub const WATERMARK_ID: &str = "watermark";

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const COPY_STATE_ID: &str = "copy-state";

pub const ACTION_ATTR: &str = "data-action";
pub const PANEL_ATTR: &str = "data-panel";
pub const CATEGORY_ATTR: &str = "data-category";

// Class applied to the stage while a panel is expanded
pub const STAGE_FOCUSED_CLASS: &str = "has-active";

// Shader clock runs in seconds from page start
pub const MAX_FRAME_TIME_SEC: f32 = 1.0e5; // wraps the clock to keep f32 noise inputs precise
