// Contact form. There is no backend: a submission with both name and email
// filled in flips the button to a "Sent!" state, and after a pause the form is
// reset and the visitor gets a thank-you alert.

use crate::config::TimingConfig;
use crate::dom;
use crate::error::{Error, Result};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, error};
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement, Window};

pub const FORM_ID: &str = "contactForm";
pub const NAME_ID: &str = "name";
pub const EMAIL_ID: &str = "email";
pub const SENT_LABEL: &str = "Sent!";

#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub name: String,
    pub email: String,
}

impl Submission {
    /// `None` unless both fields are non-empty.
    pub fn from_fields(name: String, email: String) -> Option<Submission> {
        if name.is_empty() || email.is_empty() {
            None
        } else {
            Some(Submission { name, email })
        }
    }

    pub fn thank_you(&self) -> String {
        format!(
            "Thanks {}! I'll get back to you at {} soon.",
            self.name, self.email
        )
    }
}

struct ContactForm {
    window: Window,
    form: HtmlFormElement,
    name: HtmlInputElement,
    email: HtmlInputElement,
    button: HtmlElement,
    feedback_ms: i32,
    in_flight: Rc<Cell<bool>>,
}

impl ContactForm {
    fn submit(&self) -> Result<()> {
        if self.in_flight.get() {
            return Ok(());
        }
        let submission = match Submission::from_fields(self.name.value(), self.email.value()) {
            Some(submission) => submission,
            None => {
                debug!("contact form incomplete");
                return Ok(());
            }
        };

        let original_label = self.button.inner_text();
        self.button.set_inner_text(SENT_LABEL);
        dom::set_style(&self.button, "background", "var(--primary)");
        dom::set_style(&self.button, "color", "var(--bg-color)");
        self.in_flight.set(true);

        let window = self.window.clone();
        let form = self.form.clone();
        let button = self.button.clone();
        let in_flight = self.in_flight.clone();
        dom::set_timeout(&self.window, self.feedback_ms, move || {
            in_flight.set(false);
            if !form.is_connected() {
                return;
            }
            form.reset();
            button.set_inner_text(&original_label);
            dom::set_style(&button, "background", "");
            dom::set_style(&button, "color", "");
            if let Err(e) = window.alert_with_message(&submission.thank_you()) {
                error!(error = ?e, "could not show confirmation");
            }
        })?;
        Ok(())
    }
}

pub fn install(window: &Window, document: &Document, timing: &TimingConfig) -> Result<()> {
    let form: HtmlFormElement = dom::by_id(document, FORM_ID)?;
    let button = dom::query_in(&form, "button")?
        .ok_or_else(|| Error::MissingElement(format!("#{} button", FORM_ID)))?;
    let contact = ContactForm {
        window: window.clone(),
        name: dom::by_id(document, NAME_ID)?,
        email: dom::by_id(document, EMAIL_ID)?,
        form: form.clone(),
        button,
        feedback_ms: timing.form_feedback_ms,
        in_flight: Rc::new(Cell::new(false)),
    };

    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        if let Err(e) = contact.submit() {
            error!(error = %e, "contact form submit failed");
        }
    })
}
