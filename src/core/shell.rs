use super::content::Content;
use super::form::{SubmitBlocked, Submission};
use super::panel::{PanelId, PanelMachine, PanelState, Transition};
use super::pointer::{PointerSignal, PointerTracker};
use super::relay::RelayError;
use super::scene::{compose, Layout, SceneFrame};

/// Everything the page can ask the shell to do.
#[derive(Debug)]
pub enum Action {
    PointerMove { x: f32, y: f32, width: f32, height: f32 },
    Viewport { width: f64 },
    Open(PanelId),
    Close,
    Filter(String),
    CopyEmail,
    CopyExpired(u32),
    EditName(String),
    EditMessage(String),
    Submit,
    SendFinished { ticket: u32, outcome: Result<(), RelayError> },
    FormExpired(u32),
}

/// Work the browser layer has to carry out after a dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Re-apply shard transforms and visibility.
    Layout,
    /// A panel opened; render its body.
    Opened(PanelId),
    /// A panel closed; drop its body and clear pending timers.
    Closed(PanelId),
    /// Re-render the open panel's body (filter changed).
    PanelBody,
    /// Sync contact form controls with the form state.
    Form,
    /// Copy text to the clipboard and arm the confirmation timer.
    Copy { text: &'static str, ticket: u32 },
    CopyState,
    /// Perform one relay call.
    Send(Submission),
    /// Arm the auto-reset timer for the form.
    ArmFormReset(u32),
}

/// Top-level UI controller: pointer, responsive layout and panel state.
#[derive(Debug)]
pub struct Shell {
    content: &'static Content,
    pointer: PointerTracker,
    panels: PanelMachine,
    layout: Layout,
}

impl Shell {
    pub fn new(content: &'static Content, viewport_width: f64) -> Self {
        Self {
            content,
            pointer: PointerTracker::default(),
            panels: PanelMachine::default(),
            layout: Layout::for_width(viewport_width),
        }
    }

    pub fn content(&self) -> &'static Content {
        self.content
    }

    pub fn pointer(&self) -> PointerSignal {
        self.pointer.signal()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn panels(&self) -> &PanelMachine {
        &self.panels
    }

    pub fn state(&self) -> PanelState {
        self.panels.state()
    }

    pub fn frame(&self) -> SceneFrame {
        compose(self.pointer.signal(), self.layout, self.panels.state())
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::PointerMove { x, y, width, height } => {
                let live = self.panels.is_idle();
                if self.pointer.track(x, y, width, height, live) {
                    vec![Effect::Layout]
                } else {
                    vec![]
                }
            }
            Action::Viewport { width } => {
                let next = Layout::for_width(width);
                if next == self.layout {
                    return vec![];
                }
                self.layout = next;
                vec![Effect::Layout]
            }
            Action::Open(id) => match self.panels.activate(id) {
                Transition::Opened(id) => {
                    log::info!("[panel] open {}", id.as_str());
                    vec![Effect::Opened(id), Effect::Layout]
                }
                _ => {
                    log::debug!("[panel] ignored open {} while {:?}", id.as_str(), self.state());
                    vec![]
                }
            },
            Action::Close => match self.panels.close() {
                Transition::Closed(id) => {
                    log::info!("[panel] close {}", id.as_str());
                    vec![Effect::Closed(id), Effect::Layout]
                }
                _ => vec![],
            },
            Action::Filter(category) => {
                let Some(eph) = self.panels.ephemeral_for(PanelId::Projects) else {
                    return vec![];
                };
                if eph.filter.select(&category) {
                    vec![Effect::PanelBody]
                } else {
                    vec![]
                }
            }
            Action::CopyEmail => {
                let email = self.content.identity.email;
                let Some(eph) = self.panels.ephemeral_for(PanelId::Contact) else {
                    return vec![];
                };
                let ticket = eph.copied.show();
                vec![Effect::Copy { text: email, ticket }, Effect::CopyState]
            }
            Action::CopyExpired(ticket) => {
                // a close in between already reset the confirmation
                let Some(eph) = self.panels.ephemeral_for(PanelId::Contact) else {
                    return vec![];
                };
                if eph.copied.expire(ticket) {
                    vec![Effect::CopyState]
                } else {
                    vec![]
                }
            }
            Action::EditName(v) => self.edit_form(|f| f.set_name(&v)),
            Action::EditMessage(v) => self.edit_form(|f| f.set_message(&v)),
            Action::Submit => {
                let reply_to = self.content.identity.email;
                let Some(eph) = self.panels.ephemeral_for(PanelId::Contact) else {
                    return vec![];
                };
                match eph.form.submit(reply_to) {
                    Ok(sub) => {
                        log::info!("[form] sending (ticket {})", sub.ticket);
                        vec![Effect::Form, Effect::Send(sub)]
                    }
                    Err(SubmitBlocked::EmptyField) => {
                        log::debug!("[form] submit blocked: empty field");
                        vec![]
                    }
                    Err(SubmitBlocked::InFlight) => vec![],
                }
            }
            Action::SendFinished { ticket, outcome } => {
                if let Err(e) = &outcome {
                    log::error!("[relay] send failed: {}", e);
                }
                let Some(eph) = self.panels.ephemeral_for(PanelId::Contact) else {
                    log::debug!("[form] dropped result for closed panel (ticket {})", ticket);
                    return vec![];
                };
                if eph.form.finish(ticket, &outcome) {
                    vec![Effect::Form, Effect::ArmFormReset(ticket)]
                } else {
                    vec![]
                }
            }
            Action::FormExpired(ticket) => {
                let Some(eph) = self.panels.ephemeral_for(PanelId::Contact) else {
                    return vec![];
                };
                if eph.form.expire(ticket) {
                    vec![Effect::Form]
                } else {
                    vec![]
                }
            }
        }
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut super::form::ContactForm) -> bool) -> Vec<Effect> {
        match self.panels.ephemeral_for(PanelId::Contact) {
            // the input already shows the new text; nothing to re-render
            Some(eph) => {
                edit(&mut eph.form);
                vec![]
            }
            None => vec![],
        }
    }
}

impl Action {
    /// Map a `data-action` attribute (plus its companions) onto an action.
    pub fn from_dom(action: &str, panel: Option<&str>, category: Option<&str>) -> Option<Self> {
        match action {
            "open" => panel.and_then(PanelId::parse).map(Action::Open),
            "close" => Some(Action::Close),
            "filter" => category.map(|c| Action::Filter(c.to_string())),
            "copy-email" => Some(Action::CopyEmail),
            _ => None,
        }
    }

    pub fn for_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Action::Close),
            _ => None,
        }
    }
}
