//! Death event schema.

use registry_core::{
    event_types, ActionConfig, ActionType, DeclarationForm, EventConfig, FieldConfig, FormPage,
    Message,
};

/// The death event config.
pub fn death_event() -> EventConfig {
    EventConfig {
        id: event_types::DEATH.to_string(),
        label: Message::new("event.death.label", "Death"),
        declaration: DeclarationForm {
            label: Message::new("event.death.declaration.label", "Death declaration"),
            pages: vec![deceased_page(), event_details_page(), informant_page()],
        },
        actions: vec![
            ActionConfig::new(
                ActionType::Read,
                Message::new("event.death.action.read.label", "Read"),
                vec![],
            ),
            ActionConfig::new(
                ActionType::Declare,
                Message::new("event.death.action.declare.label", "Declare"),
                vec![],
            ),
            ActionConfig::new(
                ActionType::Validate,
                Message::new("event.death.action.validate.label", "Validate"),
                vec![],
            ),
            ActionConfig::new(
                ActionType::Register,
                Message::new("event.death.action.register.label", "Register"),
                vec![],
            ),
            ActionConfig::new(
                ActionType::PrintCertificate,
                Message::new(
                    "event.death.action.collect-certificate.label",
                    "Print certificate",
                ),
                vec![
                    FieldConfig::new(
                        "collector.requesterId",
                        Message::new(
                            "event.death.action.certificate.collector.requesterId.label",
                            "Certificate requester",
                        ),
                    )
                    .analytics(),
                    FieldConfig::new(
                        "collector.identity.verified",
                        Message::new(
                            "event.death.action.certificate.collector.verified.label",
                            "ID verified",
                        ),
                    ),
                ],
            ),
            ActionConfig::new(
                ActionType::RequestCorrection,
                Message::new(
                    "event.death.action.request-correction.label",
                    "Request correction",
                ),
                vec![FieldConfig::new(
                    "correction.requester.relationship",
                    Message::new(
                        "event.death.action.correction.requester.label",
                        "Requested by",
                    ),
                )
                .analytics()],
            ),
        ],
    }
}

fn deceased_page() -> FormPage {
    FormPage::new(
        "deceased",
        Message::new("event.death.page.deceased.title", "Deceased's details"),
        vec![
            FieldConfig::new(
                "deceased.name.firstname",
                Message::new("event.death.field.deceased.firstname.label", "First name(s)"),
            ),
            FieldConfig::new(
                "deceased.name.surname",
                Message::new("event.death.field.deceased.surname.label", "Last name"),
            ),
            FieldConfig::new(
                "deceased.gender",
                Message::new("event.death.field.deceased.gender.label", "Sex"),
            )
            .analytics(),
            FieldConfig::new(
                "deceased.dob",
                Message::new("event.death.field.deceased.dob.label", "Date of birth"),
            )
            .analytics(),
            FieldConfig::new(
                "deceased.address",
                Message::new(
                    "event.death.field.deceased.address.label",
                    "Usual place of residence",
                ),
            ),
        ],
    )
}

fn event_details_page() -> FormPage {
    FormPage::new(
        "eventDetails",
        Message::new("event.death.page.eventDetails.title", "Event details"),
        vec![
            FieldConfig::new(
                "eventDetails.date",
                Message::new("event.death.field.eventDetails.date.label", "Date of death"),
            )
            .analytics(),
            FieldConfig::new(
                "eventDetails.placeOfDeath",
                Message::new(
                    "event.death.field.eventDetails.placeOfDeath.label",
                    "Place of death",
                ),
            )
            .analytics(),
            FieldConfig::new(
                "eventDetails.causeOfDeath",
                Message::new(
                    "event.death.field.eventDetails.causeOfDeath.label",
                    "Cause of death established",
                ),
            ),
        ],
    )
}

fn informant_page() -> FormPage {
    FormPage::new(
        "informant",
        Message::new("event.death.page.informant.title", "Informant's details"),
        vec![
            FieldConfig::new(
                "informant.relation",
                Message::new(
                    "event.death.field.informant.relation.label",
                    "Relationship to deceased",
                ),
            )
            .analytics(),
            FieldConfig::new(
                "informant.phoneNo",
                Message::new("event.death.field.informant.phoneNo.label", "Phone number"),
            ),
        ],
    )
}
