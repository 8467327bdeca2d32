use super::relay::{RelayError, TemplateParams};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SendStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            SendStatus::Idle => "SEND PACKET",
            SendStatus::Sending => "SENDING...",
            SendStatus::Success => "PACKET SENT",
            SendStatus::Error => "FAILED - TRY AGAIN",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SendStatus::Idle => "status-idle",
            SendStatus::Sending => "status-sending",
            SendStatus::Success => "status-success",
            SendStatus::Error => "status-error",
        }
    }
}

/// Why a submit did not start a relay call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    EmptyField,
    InFlight,
}

/// A relay call the caller must perform, tagged with the form ticket it
/// belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u32,
    pub params: TemplateParams,
}

/// Contact form fields plus send status.
///
/// Every submit and every reset bumps `ticket`; completions and auto-reset
/// timers carry the ticket they were issued for and are ignored once stale.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    name: String,
    message: String,
    status: SendStatus,
    ticket: u32,
}

impl ContactForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> SendStatus {
        self.status
    }

    pub fn ticket(&self) -> u32 {
        self.ticket
    }

    /// Inputs and the submit button are disabled while a call is in flight.
    pub fn inputs_enabled(&self) -> bool {
        self.status != SendStatus::Sending
    }

    pub fn set_name(&mut self, value: &str) -> bool {
        if !self.inputs_enabled() {
            return false;
        }
        self.name = value.to_string();
        true
    }

    pub fn set_message(&mut self, value: &str) -> bool {
        if !self.inputs_enabled() {
            return false;
        }
        self.message = value.to_string();
        true
    }

    pub fn submit(&mut self, reply_to: &str) -> Result<Submission, SubmitBlocked> {
        if self.status == SendStatus::Sending {
            return Err(SubmitBlocked::InFlight);
        }
        if self.name.is_empty() || self.message.is_empty() {
            return Err(SubmitBlocked::EmptyField);
        }
        self.ticket = self.ticket.wrapping_add(1);
        self.status = SendStatus::Sending;
        Ok(Submission {
            ticket: self.ticket,
            params: TemplateParams {
                from_name: self.name.clone(),
                message: self.message.clone(),
                reply_to: reply_to.to_string(),
            },
        })
    }

    /// Record the relay outcome. Returns false for stale tickets.
    pub fn finish(&mut self, ticket: u32, outcome: &Result<(), RelayError>) -> bool {
        if ticket != self.ticket || self.status != SendStatus::Sending {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.status = SendStatus::Success;
                self.name.clear();
                self.message.clear();
            }
            Err(_) => {
                self.status = SendStatus::Error;
            }
        }
        true
    }

    /// Delayed return to idle after success or error.
    pub fn expire(&mut self, ticket: u32) -> bool {
        if ticket != self.ticket {
            return false;
        }
        match self.status {
            SendStatus::Success | SendStatus::Error => {
                self.status = SendStatus::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        let ticket = self.ticket.wrapping_add(1);
        *self = Self {
            ticket,
            ..Self::default()
        };
    }
}
