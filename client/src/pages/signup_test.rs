use leptos::prelude::*;

use super::*;

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Sign Up");
    assert_eq!(submit_label(true), "Creating account...");
}

#[test]
fn snapshot_copies_every_field() {
    let owner = Owner::new();
    owner.with(|| {
        let fields = SignupFields::new();
        fields.username.set("ada".to_owned());
        fields.email.set("ada@example.com".to_owned());
        fields.password.set("secret1".to_owned());
        fields.confirm_password.set("secret2".to_owned());
        fields.first_name.set("Ada".to_owned());
        fields.last_name.set("Lovelace".to_owned());

        let form = fields.snapshot();
        assert_eq!(form.username, "ada");
        assert_eq!(form.confirm_password, "secret2");
        assert_eq!(form.last_name, "Lovelace");
        assert_eq!(form.validate().unwrap_err().to_string(), "Passwords do not match");
    });
}
