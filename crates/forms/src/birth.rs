//! Birth event schema.

use registry_core::{
    event_types, ActionConfig, ActionType, DeclarationForm, EventConfig, FieldConfig, FormPage,
    Message,
};

/// The birth event config.
///
/// Analytics flags mark the fields exported to the reporting store; names,
/// addresses, and contact details stay out.
pub fn birth_event() -> EventConfig {
    EventConfig {
        id: event_types::BIRTH.to_string(),
        label: Message::new("event.birth.label", "Birth"),
        declaration: DeclarationForm {
            label: Message::new("event.birth.declaration.label", "Birth declaration"),
            pages: vec![child_page(), mother_page(), father_page(), informant_page()],
        },
        actions: vec![
            ActionConfig::new(
                ActionType::Read,
                Message::new("event.birth.action.read.label", "Read"),
                vec![],
            ),
            ActionConfig::new(
                ActionType::Declare,
                Message::new("event.birth.action.declare.label", "Declare"),
                vec![],
            ),
            ActionConfig::new(
                ActionType::Validate,
                Message::new("event.birth.action.validate.label", "Validate"),
                vec![],
            ),
            ActionConfig::new(
                ActionType::Register,
                Message::new("event.birth.action.register.label", "Register"),
                vec![],
            ),
            ActionConfig::new(
                ActionType::PrintCertificate,
                Message::new(
                    "event.birth.action.collect-certificate.label",
                    "Print certificate",
                ),
                vec![
                    FieldConfig::new(
                        "collector.requesterId",
                        Message::new(
                            "event.birth.action.certificate.collector.requesterId.label",
                            "Certificate requester",
                        ),
                    )
                    .analytics(),
                    FieldConfig::new(
                        "collector.identity.verified",
                        Message::new(
                            "event.birth.action.certificate.collector.verified.label",
                            "ID verified",
                        ),
                    ),
                ],
            ),
            ActionConfig::new(
                ActionType::RequestCorrection,
                Message::new(
                    "event.birth.action.request-correction.label",
                    "Request correction",
                ),
                vec![
                    FieldConfig::new(
                        "correction.requester.relationship",
                        Message::new(
                            "event.birth.action.correction.requester.label",
                            "Requested by",
                        ),
                    )
                    .analytics(),
                    FieldConfig::new(
                        "correction.request.reason",
                        Message::new(
                            "event.birth.action.correction.reason.label",
                            "Reason for correction",
                        ),
                    ),
                ],
            ),
        ],
    }
}

fn child_page() -> FormPage {
    FormPage::new(
        "child",
        Message::new("event.birth.page.child.title", "Child's details"),
        vec![
            FieldConfig::new(
                "child.name.firstname",
                Message::new("event.birth.field.child.firstname.label", "First name(s)"),
            ),
            FieldConfig::new(
                "child.name.surname",
                Message::new("event.birth.field.child.surname.label", "Last name"),
            ),
            FieldConfig::new(
                "child.gender",
                Message::new("event.birth.field.child.gender.label", "Sex"),
            )
            .analytics(),
            FieldConfig::new(
                "child.dob",
                Message::new("event.birth.field.child.dob.label", "Date of birth"),
            )
            .analytics(),
            FieldConfig::new(
                "child.placeOfBirth",
                Message::new("event.birth.field.child.placeOfBirth.label", "Place of birth"),
            )
            .analytics(),
            FieldConfig::new(
                "child.birthLocation",
                Message::new("event.birth.field.child.birthLocation.label", "Health facility"),
            ),
            FieldConfig::new(
                "child.attendantAtBirth",
                Message::new(
                    "event.birth.field.child.attendantAtBirth.label",
                    "Attendant at birth",
                ),
            )
            .analytics(),
            FieldConfig::new(
                "child.birthType",
                Message::new("event.birth.field.child.birthType.label", "Type of birth"),
            ),
            FieldConfig::new(
                "child.weightAtBirth",
                Message::new("event.birth.field.child.weightAtBirth.label", "Weight at birth"),
            ),
        ],
    )
}

fn mother_page() -> FormPage {
    FormPage::new(
        "mother",
        Message::new("event.birth.page.mother.title", "Mother's details"),
        vec![
            FieldConfig::new(
                "mother.name.firstname",
                Message::new("event.birth.field.mother.firstname.label", "First name(s)"),
            ),
            FieldConfig::new(
                "mother.name.surname",
                Message::new("event.birth.field.mother.surname.label", "Last name"),
            ),
            FieldConfig::new(
                "mother.dob",
                Message::new("event.birth.field.mother.dob.label", "Date of birth"),
            )
            .analytics(),
            FieldConfig::new(
                "mother.nationality",
                Message::new("event.birth.field.mother.nationality.label", "Nationality"),
            ),
            FieldConfig::new(
                "mother.address",
                Message::new("event.birth.field.mother.address.label", "Usual place of residence"),
            ),
        ],
    )
}

fn father_page() -> FormPage {
    FormPage::new(
        "father",
        Message::new("event.birth.page.father.title", "Father's details"),
        vec![
            FieldConfig::new(
                "father.name.firstname",
                Message::new("event.birth.field.father.firstname.label", "First name(s)"),
            ),
            FieldConfig::new(
                "father.name.surname",
                Message::new("event.birth.field.father.surname.label", "Last name"),
            ),
            FieldConfig::new(
                "father.dob",
                Message::new("event.birth.field.father.dob.label", "Date of birth"),
            )
            .analytics(),
            FieldConfig::new(
                "father.nationality",
                Message::new("event.birth.field.father.nationality.label", "Nationality"),
            ),
        ],
    )
}

fn informant_page() -> FormPage {
    FormPage::new(
        "informant",
        Message::new("event.birth.page.informant.title", "Informant's details"),
        vec![
            FieldConfig::new(
                "informant.relation",
                Message::new(
                    "event.birth.field.informant.relation.label",
                    "Relationship to child",
                ),
            )
            .analytics(),
            FieldConfig::new(
                "informant.phoneNo",
                Message::new("event.birth.field.informant.phoneNo.label", "Phone number"),
            ),
            FieldConfig::new(
                "informant.email",
                Message::new("event.birth.field.informant.email.label", "Email"),
            ),
        ],
    )
}
