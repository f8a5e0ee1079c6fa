use super::*;
use crate::state::registration::AvatarMeta;
use crate::util::validation::ValidRegistration;
use uuid::Uuid;

fn payload() -> TicketPayload {
    let registration = ValidRegistration {
        full_name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        username: "janedoe".to_owned(),
        avatar: AvatarMeta { name: "jane.png".to_owned(), mime_type: "image/png".to_owned(), size_bytes: 1 },
    };
    TicketPayload::new(registration, "blob:jane".to_owned(), Uuid::nil())
}

#[test]
fn greeting_uses_full_name() {
    assert_eq!(greeting(&payload()), "Congrats, Jane Doe!");
}

#[test]
fn email_notice_mentions_address() {
    assert!(email_notice(&payload()).contains("jane@example.com"));
}
