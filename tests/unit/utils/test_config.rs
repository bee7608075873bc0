use sedotmp_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn missing_variable_falls_back_to_default() {
    let value: u32 = get_env_or_default("SEDOTMP_TEST_SURELY_UNSET_VARIABLE", 42);
    assert_eq!(value, 42);

    let text = get_env_or_default("SEDOTMP_TEST_SURELY_UNSET_VARIABLE", String::from("v1"));
    assert_eq!(text, "v1");
}

#[test]
fn missing_variable_is_none() {
    let value: Option<u64> = get_env_or_none("SEDOTMP_TEST_SURELY_UNSET_VARIABLE");
    assert_eq!(value, None);
}

#[test]
fn present_variable_is_parsed_and_trimmed() {
    // SAFETY: the variable name is unique to this test
    unsafe {
        std::env::set_var("SEDOTMP_TEST_PARSED_VARIABLE", " 17 ");
        std::env::set_var("SEDOTMP_TEST_BAD_VARIABLE", "not-a-number");
        std::env::set_var("SEDOTMP_TEST_BLANK_VARIABLE", "   ");
    }

    assert_eq!(get_env_or_default("SEDOTMP_TEST_PARSED_VARIABLE", 0u32), 17);
    assert_eq!(get_env_or_none::<u32>("SEDOTMP_TEST_PARSED_VARIABLE"), Some(17));
    assert_eq!(get_env_or_default("SEDOTMP_TEST_BAD_VARIABLE", 5u32), 5);
    assert_eq!(get_env_or_none::<u32>("SEDOTMP_TEST_BAD_VARIABLE"), None);
    assert_eq!(
        get_env_or_default("SEDOTMP_TEST_BLANK_VARIABLE", String::from("fallback")),
        "fallback"
    );
}
