use super::form::ContactForm;
use super::projects::ProjectFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    About,
    Projects,
    Stack,
    Contact,
}

impl PanelId {
    pub const ALL: [PanelId; 4] = [
        PanelId::About,
        PanelId::Projects,
        PanelId::Stack,
        PanelId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::About => "about",
            PanelId::Projects => "projects",
            PanelId::Stack => "stack",
            PanelId::Contact => "contact",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "about" => Some(PanelId::About),
            "projects" => Some(PanelId::Projects),
            "stack" => Some(PanelId::Stack),
            "contact" => Some(PanelId::Contact),
            _ => None,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Idle,
    Active(PanelId),
}

/// Outcome of an activation or close request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened(PanelId),
    Closed(PanelId),
    Ignored,
}

/// "Copied!" confirmation next to the email address.
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyConfirm {
    shown: bool,
    ticket: u32,
}

impl CopyConfirm {
    pub fn shown(&self) -> bool {
        self.shown
    }

    pub fn show(&mut self) -> u32 {
        self.ticket = self.ticket.wrapping_add(1);
        self.shown = true;
        self.ticket
    }

    pub fn expire(&mut self, ticket: u32) -> bool {
        if ticket != self.ticket || !self.shown {
            return false;
        }
        self.shown = false;
        true
    }

    pub fn reset(&mut self) {
        self.ticket = self.ticket.wrapping_add(1);
        self.shown = false;
    }
}

/// Panel-local state that only lives while its panel is open.
#[derive(Clone, Debug, Default)]
pub struct Ephemeral {
    pub form: ContactForm,
    pub copied: CopyConfirm,
    pub filter: ProjectFilter,
}

impl Ephemeral {
    fn reset(&mut self) {
        self.form.reset();
        self.copied.reset();
        self.filter.reset();
    }
}

/// Single-active-panel state machine.
///
/// `Idle -> Active(p)` only from `Idle`; `Active(p) -> Idle` on close. Every
/// return to `Idle` runs the one reset hook over all ephemeral state.
#[derive(Clone, Debug, Default)]
pub struct PanelMachine {
    state: PanelState,
    ephemeral: Ephemeral,
}

impl PanelMachine {
    #[inline]
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[inline]
    pub fn active(&self) -> Option<PanelId> {
        match self.state {
            PanelState::Idle => None,
            PanelState::Active(id) => Some(id),
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == PanelState::Idle
    }

    #[inline]
    pub fn is_active(&self, id: PanelId) -> bool {
        self.state == PanelState::Active(id)
    }

    pub fn activate(&mut self, id: PanelId) -> Transition {
        match self.state {
            PanelState::Idle => {
                self.state = PanelState::Active(id);
                Transition::Opened(id)
            }
            PanelState::Active(_) => Transition::Ignored,
        }
    }

    pub fn close(&mut self) -> Transition {
        match self.state {
            PanelState::Idle => Transition::Ignored,
            PanelState::Active(id) => {
                self.state = PanelState::Idle;
                self.ephemeral.reset();
                Transition::Closed(id)
            }
        }
    }

    pub fn ephemeral(&self) -> &Ephemeral {
        &self.ephemeral
    }

    /// Mutable access to the ephemeral state of `id`, only while it is open.
    pub fn ephemeral_for(&mut self, id: PanelId) -> Option<&mut Ephemeral> {
        if self.is_active(id) {
            Some(&mut self.ephemeral)
        } else {
            None
        }
    }
}
