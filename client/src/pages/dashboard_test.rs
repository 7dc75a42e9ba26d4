use super::*;

fn make_user() -> User {
    User {
        id: 3,
        username: "linus".to_owned(),
        email: "linus@example.com".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
    }
}

#[test]
fn greeting_uses_display_name() {
    let user = User { first_name: "Linus".to_owned(), ..make_user() };
    assert_eq!(greeting(&user), "Welcome, Linus");
    assert_eq!(greeting(&make_user()), "Welcome, linus");
}

#[test]
fn greeting_without_profile() {
    assert_eq!(greeting(&User::default()), "Welcome");
}

#[test]
fn field_or_dash_fills_blanks() {
    assert_eq!(field_or_dash("  "), "\u{2014}");
    assert_eq!(field_or_dash("linus"), "linus");
}
