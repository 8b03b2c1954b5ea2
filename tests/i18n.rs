use marine_fuel_toolbox::i18n::{keys, resolve_language, Language, Translator};

#[test]
fn english_and_korean_labels() {
    let en = Translator::new("en-US");
    assert_eq!(en.language(), Language::En);
    assert_eq!(en.t(keys::ERROR_PREFIX), "Error");

    let ko = Translator::new("ko");
    assert_eq!(ko.language_code(), "ko");
    assert_eq!(ko.t(keys::ERROR_PREFIX), "오류");
}

#[test]
fn unknown_key_falls_back_to_key() {
    let tr = Translator::new("en");
    assert_eq!(tr.t("no.such.key"), "no.such.key");
}

#[test]
fn cli_flag_wins_over_config() {
    assert_eq!(resolve_language("ko", Some("en")), "ko");
    assert_eq!(resolve_language("auto", Some("en-GB")), "en");
}

#[test]
fn language_pack_overrides_builtin_strings() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("en.toml"),
        "[general]\nerror_prefix = \"Problem\"\n",
    )
    .expect("write pack");
    let tr = Translator::new_with_pack("en", dir.path().to_str());
    assert_eq!(tr.t(keys::ERROR_PREFIX), "Problem");
    assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
}
