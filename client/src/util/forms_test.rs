use super::*;

#[test]
fn optional_trims_and_drops_blanks() {
    assert_eq!(optional("  Leeds "), Some("Leeds".to_owned()));
    assert_eq!(optional("   "), None);
}

#[test]
fn credentials_trim_email_but_not_password() {
    let creds = credentials("  ada@example.com ", " secret ");
    assert_eq!(creds.email, "ada@example.com");
    assert_eq!(creds.password, " secret ");
}

#[test]
fn registration_requires_a_known_role() {
    let form = registration(" Ada ", "ada@example.com", "pw", "Recruiter").unwrap();
    assert_eq!(form.name, "Ada");
    assert_eq!(form.role, Role::Recruiter);

    assert!(registration("Ada", "ada@example.com", "pw", "").is_err());
    assert!(registration("Ada", "ada@example.com", "pw", "admin").is_err());
}

#[test]
fn parse_year_accepts_blank_and_numbers() {
    assert_eq!(parse_year(""), Ok(None));
    assert_eq!(parse_year(" 2019 "), Ok(Some(2019)));
    assert!(parse_year("last year").is_err());
}

#[test]
fn teacher_query_omits_blank_fields() {
    let query = teacher_query("Maths", " ", "");
    assert_eq!(query.subject.as_deref(), Some("Maths"));
    assert_eq!(query.city, None);
    assert_eq!(query.search, None);
}

#[test]
fn min_experience_ignores_garbage() {
    assert_eq!(min_experience("5"), Some(5));
    assert_eq!(min_experience("five"), None);
    assert_eq!(min_experience(""), None);
}

#[test]
fn entry_form_round_trips_a_saved_entry() {
    let entry = ProfileEntry {
        id: 3,
        title: "Science teacher".into(),
        organization: "Hillside".into(),
        start_year: 2016,
        end_year: None,
        description: Some("KS3 and KS4".into()),
    };
    let form = EntryForm::from_entry(&entry);
    assert_eq!(form.end_year, "");

    let draft = form.to_draft().unwrap();
    assert_eq!(draft, EntryDraft::from(&entry));
}

#[test]
fn entry_form_needs_start_year() {
    let form = EntryForm { title: "Tutor".into(), ..EntryForm::default() };
    assert_eq!(form.to_draft(), Err("Enter a start year."));

    let form = EntryForm { start_year: "2020".into(), end_year: "soon".into(), ..EntryForm::default() };
    assert!(form.to_draft().is_err());
}

#[test]
fn address_form_maps_blank_optionals_to_none() {
    let form = AddressForm { line1: " 1 High St ".into(), city: "York".into(), country: "UK".into(), ..AddressForm::default() };
    let address = form.to_address();
    assert_eq!(address.id, None);
    assert_eq!(address.line1, "1 High St");
    assert_eq!(address.line2, None);
    assert_eq!(address.country.as_deref(), Some("UK"));
}

#[test]
fn subject_list_splits_on_commas() {
    assert_eq!(subject_list(" Maths, Physics ,,"), vec!["Maths".to_owned(), "Physics".to_owned()]);
    assert!(subject_list("").is_empty());
}

#[test]
fn profile_patch_sends_only_filled_fields() {
    let patch = profile_patch("", "Patient tutor", " ", "Chemistry");
    assert_eq!(patch.name, None);
    assert_eq!(patch.bio.as_deref(), Some("Patient tutor"));
    assert_eq!(patch.city, None);
    assert_eq!(patch.subjects, Some(vec!["Chemistry".to_owned()]));
    assert_eq!(profile_patch("", "", "", ""), ProfilePatch::default());
}
