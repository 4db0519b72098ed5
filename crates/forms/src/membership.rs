//! Tennis club membership event schema.
//!
//! The demo event used for onboarding and integration testing; kept in the
//! registry so its histories are exported like any civil registration event.

use registry_core::{
    event_types, ActionConfig, ActionType, DeclarationForm, EventConfig, FieldConfig, FormPage,
    Message,
};

/// The tennis club membership event config.
pub fn tennis_club_membership_event() -> EventConfig {
    EventConfig {
        id: event_types::TENNIS_CLUB_MEMBERSHIP.to_string(),
        label: Message::new("event.tennis-club-membership.label", "Tennis club membership"),
        declaration: DeclarationForm {
            label: Message::new(
                "event.tennis-club-membership.declaration.label",
                "Tennis club membership application",
            ),
            pages: vec![applicant_page(), recommender_page()],
        },
        actions: vec![
            ActionConfig::new(
                ActionType::Declare,
                Message::new("event.tennis-club-membership.action.declare.label", "Declare"),
                vec![],
            ),
            ActionConfig::new(
                ActionType::Register,
                Message::new(
                    "event.tennis-club-membership.action.register.label",
                    "Register",
                ),
                vec![],
            ),
            ActionConfig::new(
                ActionType::PrintCertificate,
                Message::new(
                    "event.tennis-club-membership.action.collect-certificate.label",
                    "Print certificate",
                ),
                vec![FieldConfig::new(
                    "collector.requesterId",
                    Message::new(
                        "event.tennis-club-membership.action.certificate.collector.requesterId.label",
                        "Certificate requester",
                    ),
                )
                .analytics()],
            ),
        ],
    }
}

fn applicant_page() -> FormPage {
    FormPage::new(
        "applicant",
        Message::new(
            "event.tennis-club-membership.page.applicant.title",
            "Who is applying for the membership?",
        ),
        vec![
            FieldConfig::new(
                "applicant.firstname",
                Message::new(
                    "event.tennis-club-membership.field.applicant.firstname.label",
                    "Applicant's first name",
                ),
            ),
            FieldConfig::new(
                "applicant.surname",
                Message::new(
                    "event.tennis-club-membership.field.applicant.surname.label",
                    "Applicant's surname",
                ),
            ),
            FieldConfig::new(
                "applicant.dob",
                Message::new(
                    "event.tennis-club-membership.field.applicant.dob.label",
                    "Applicant's date of birth",
                ),
            )
            .analytics(),
        ],
    )
}

fn recommender_page() -> FormPage {
    FormPage::new(
        "recommender",
        Message::new(
            "event.tennis-club-membership.page.recommender.title",
            "Who is recommending the applicant?",
        ),
        vec![
            FieldConfig::new(
                "recommender.none",
                Message::new(
                    "event.tennis-club-membership.field.recommender.none.label",
                    "No recommender",
                ),
            ),
            FieldConfig::new(
                "recommender.firstname",
                Message::new(
                    "event.tennis-club-membership.field.recommender.firstname.label",
                    "Recommender's first name",
                ),
            ),
            FieldConfig::new(
                "recommender.surname",
                Message::new(
                    "event.tennis-club-membership.field.recommender.surname.label",
                    "Recommender's surname",
                ),
            ),
        ],
    )
}
