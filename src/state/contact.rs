use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::error::ParseServiceError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    #[default]
    Refill,
    Delivery,
    Cylinder,
    Safety,
    Other,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Refill,
        ServiceKind::Delivery,
        ServiceKind::Cylinder,
        ServiceKind::Safety,
        ServiceKind::Other,
    ];

    /// Value used in the `<option>` element.
    pub fn value(self) -> &'static str {
        match self {
            ServiceKind::Refill => "refill",
            ServiceKind::Delivery => "delivery",
            ServiceKind::Cylinder => "cylinder",
            ServiceKind::Safety => "safety",
            ServiceKind::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Refill => "Gas Refill",
            ServiceKind::Delivery => "Home Delivery",
            ServiceKind::Cylinder => "Cylinder Purchase",
            ServiceKind::Safety => "Safety Inspection",
            ServiceKind::Other => "Other Inquiry",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for ServiceKind {
    type Err = ParseServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.value() == s)
            .ok_or_else(|| ParseServiceError(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Phone => "Phone Number",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub phone: String,
    pub message: String,
    pub service: ServiceKind,
}

impl ContactFormData {
    pub const REQUIRED: [ContactField; 2] = [ContactField::Name, ContactField::Phone];

    pub fn set_text(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn set_service(&mut self, service: ServiceKind) {
        self.service = service;
    }

    pub fn text(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn missing_required(&self) -> Vec<ContactField> {
        Self::REQUIRED
            .into_iter()
            .filter(|field| self.text(*field).is_empty())
            .collect()
    }

    /// Accepts the form when the required fields are filled, handing back
    /// what was submitted and leaving `self` reset to defaults.
    pub fn submit(&mut self) -> Result<ContactFormData, Vec<ContactField>> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(missing);
        }
        Ok(std::mem::take(self))
    }
}

pub enum ContactAction {
    Text(ContactField, String),
    Service(ServiceKind),
    Reset,
}

impl Reducible for ContactFormData {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Text(field, value) => next.set_text(field, value),
            ContactAction::Service(service) => next.set_service(service),
            ContactAction::Reset => next = ContactFormData::default(),
        }
        Rc::new(next)
    }
}

pub const ACKNOWLEDGEMENT: &str = "Message sent! We'll contact you shortly.";

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactFormData {
        let mut form = ContactFormData::default();
        form.set_text(ContactField::Name, "Jane Doe".into());
        form.set_text(ContactField::Phone, "08031234567".into());
        form.set_service(ServiceKind::Refill);
        form
    }

    #[test]
    fn defaults() {
        let form = ContactFormData::default();
        assert_eq!(form.name, "");
        assert_eq!(form.phone, "");
        assert_eq!(form.message, "");
        assert_eq!(form.service, ServiceKind::Refill);
    }

    #[test]
    fn updating_one_field_leaves_the_rest() {
        let mut form = jane();
        form.set_text(ContactField::Message, "Two 12.5kg refills".into());
        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.phone, "08031234567");
        assert_eq!(form.message, "Two 12.5kg refills");
        assert_eq!(form.service, ServiceKind::Refill);

        form.set_service(ServiceKind::Delivery);
        assert_eq!(form.message, "Two 12.5kg refills");
        assert_eq!(form.service, ServiceKind::Delivery);
    }

    #[test]
    fn submit_without_message_succeeds_and_resets() {
        let mut form = jane();
        let sent = form.submit().expect("message is optional");
        assert_eq!(sent.name, "Jane Doe");
        assert_eq!(sent.phone, "08031234567");
        assert_eq!(sent.service, ServiceKind::Refill);
        assert_eq!(sent.message, "");
        assert_eq!(form, ContactFormData::default());
    }

    #[test]
    fn submit_reports_missing_required_fields() {
        let mut form = ContactFormData::default();
        form.set_text(ContactField::Message, "hello".into());
        assert_eq!(form.submit(), Err(vec![ContactField::Name, ContactField::Phone]));
        assert_eq!(form.message, "hello");

        form.set_text(ContactField::Name, "Jane Doe".into());
        assert_eq!(form.submit(), Err(vec![ContactField::Phone]));
        assert_eq!(form.name, "Jane Doe");
    }

    #[test]
    fn reducer_updates_only_the_named_field() {
        let form = Rc::new(jane())
            .reduce(ContactAction::Text(ContactField::Phone, "08039998888".into()))
            .reduce(ContactAction::Service(ServiceKind::Safety));
        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.phone, "08039998888");
        assert_eq!(form.message, "");
        assert_eq!(form.service, ServiceKind::Safety);

        let form = form.reduce(ContactAction::Reset);
        assert_eq!(*form, ContactFormData::default());
    }

    #[test]
    fn service_values_round_trip_through_option_values() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.value().parse::<ServiceKind>(), Ok(kind));
        }
        assert_eq!(
            "gas".parse::<ServiceKind>(),
            Err(ParseServiceError("gas".to_string()))
        );
    }

    #[test]
    fn service_serializes_as_option_value() {
        let json = serde_json::to_value(jane()).unwrap();
        assert_eq!(json["service"], "refill");
        assert_eq!(json["name"], "Jane Doe");
    }
}
