//! End-to-end validation scenarios against a registry with the built-in
//! catalog.

use fieldguard::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
struct User {
    email: Option<String>,
    age: Option<i64>,
    username: Option<String>,
    ssn: Option<String>,
}

impl Validatable for User {
    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "email" => self.email.clone().map(Value::from),
            "age" => self.age.map(Value::from),
            "username" => self.username.clone().map(Value::from),
            "ssn" => self.ssn.clone().map(Value::from),
            _ => None,
        }
    }
}

fn email_registry() -> Registry {
    let registry = Registry::with_builtins().unwrap();
    registry.schema::<User>().rule("email", ids::IS_EMAIL);
    registry
}

#[test]
fn email_validation_passes_and_fails() {
    init_logging();
    let registry = email_registry();
    let validator = Validator::new(&registry);

    let mut user = User {
        email: Some("validemail@example.com".into()),
        ..User::default()
    };
    assert!(validator.validate(&user).is_none());

    user.email = Some("invalidemail".into());
    let errors = validator.validate(&user).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].property, "email");
    let first = errors[0].messages().next().unwrap();
    assert!(first.contains("the property must be an email"));
}

#[test]
fn in_range_reports_bounds() {
    init_logging();
    let registry = Registry::with_builtins().unwrap();
    let range = in_range(&registry, 1.0, 10.0).unwrap();
    registry.schema::<User>().bind("age", &range);
    let validator = Validator::new(&registry);

    let user = User { age: Some(5), ..User::default() };
    assert!(validator.validate(&user).is_none());

    let user = User { age: Some(15), ..User::default() };
    let errors = validator.validate(&user).unwrap();
    assert_eq!(errors[0].constraints.len(), 1);
    let message = errors[0].constraint(ids::IN_RANGE).unwrap();
    assert!(message.contains("Between 1 and 10"));
}

#[test]
fn custom_alphanumeric_rule_with_builtin_string_check() {
    init_logging();
    // A fresh registry, so the custom rule can reuse the catalog identifier
    let registry = Registry::new();
    registry
        .declare_rule("isString", |v: &Value| v.as_str().is_some(), "must be a string")
        .unwrap();
    let alphanumeric = registry
        .declare_pattern_rule("isAlphanumeric", "^[a-zA-Z0-9]+$", "letters and digits only")
        .unwrap();
    registry
        .schema::<User>()
        .rule("username", "isString")
        .bind("username", &alphanumeric);

    let user = User {
        username: Some("abc123".into()),
        ..User::default()
    };
    assert!(Validator::new(&registry).validate(&user).is_none());
}

#[test]
fn missing_value_reports_only_required() {
    init_logging();
    let registry = Registry::with_builtins().unwrap();
    registry
        .schema::<User>()
        .rules("ssn", &[ids::IS_STRING, ids::IS_SSN]);

    let errors = Validator::new(&registry).validate(&User::default()).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].property, "ssn");
    assert_eq!(errors[0].constraint_ids().collect::<Vec<_>>(), vec![REQUIRED_CONSTRAINT]);
    assert_eq!(errors[0].to_json()["constraints"], serde_json::json!([REQUIRED_MESSAGE]));
}

#[test]
fn first_failure_returns_only_first_property() {
    init_logging();
    let registry = Registry::with_builtins().unwrap();
    registry
        .schema::<User>()
        .rule("email", ids::IS_EMAIL)
        .rule("ssn", ids::IS_SSN);

    let user = User {
        email: Some("not-an-email".into()),
        ssn: Some("000-00-0000".into()),
        ..User::default()
    };
    let validator = Validator::new(&registry);

    assert_eq!(validator.validate(&user).unwrap().len(), 2);

    let first = validator.validate_first_failure(&user).unwrap();
    assert_eq!(first.property, "email");

    match validator.validate_or_fail(&user) {
        Err(error) => assert_eq!(error.property, "email"),
        Ok(()) => panic!("expected a validation failure"),
    }
}

#[test]
fn validate_or_fail_converts_into_top_level_error() {
    fn check(validator: &Validator<'_>, user: &User) -> FieldguardResult<()> {
        validator.validate_or_fail(user)?;
        Ok(())
    }

    let registry = email_registry();
    let validator = Validator::new(&registry);

    let err = check(&validator, &User::default()).unwrap_err();
    assert!(matches!(err, FieldguardError::Validation(ref e) if e.is_required_failure()));

    let user = User {
        email: Some("ok@example.com".into()),
        ..User::default()
    };
    assert!(check(&validator, &user).is_ok());
}

#[test]
fn options_loaded_from_toml() {
    let options = ValidationOptions::from_toml_str(
        r#"
        skip_missing_properties = true

        [return_options]
        target = false
        "#,
    )
    .unwrap();

    let registry = email_registry();
    let validator = Validator::new(&registry).with_options(options);
    assert!(validator.validate(&User::default()).is_none());

    let user = User {
        email: Some("bad".into()),
        ..User::default()
    };
    let errors = validator.validate(&user).unwrap();
    assert!(errors[0].target.is_none());
    assert_eq!(errors[0].value, Some(Value::from("bad")));
}

#[test]
fn duplicate_declaration_halts_setup() {
    fn setup(registry: &Registry) -> ConfigResult<()> {
        registry.declare_pattern_rule("isTicket", r"^T-\d+$", "must be a ticket id")?;
        registry.declare_pattern_rule("isTicket", r"^T-\d+$", "must be a ticket id")?;
        Ok(())
    }

    let registry = Registry::new();
    let err = setup(&registry).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::DuplicateRule {
            identifier: "isTicket".to_string()
        }
    );
    assert_eq!(registry.rule_count(), 1);
}

#[test]
fn error_serializes_with_echoed_fields() {
    let registry = email_registry();
    let user = User {
        email: Some("bad".into()),
        age: Some(40),
        ..User::default()
    };

    let error = Validator::new(&registry).validate_first_failure(&user).unwrap();
    let json = serde_json::to_value(&error).unwrap();

    assert_eq!(json["property"], "email");
    assert_eq!(json["value"], "bad");
    // Only tracked properties appear in the target snapshot
    assert_eq!(json["target"], serde_json::json!({ "email": "bad" }));
    assert_eq!(json["constraints"]["isEmail"], "the property must be an email");

    let summary = error.summary();
    assert_eq!(summary.property, "email");
    assert_eq!(summary.constraints, vec!["the property must be an email".to_string()]);
}

#[test]
fn catalog_rejects_non_ascii_digits_and_letters() {
    init_logging();
    let registry = Registry::with_builtins().unwrap();
    registry
        .schema::<User>()
        .rule("username", ids::IS_INTEGER)
        .rule("email", ids::IS_EMAIL);
    let validator = Validator::new(&registry);

    let user = User {
        username: Some("١٢٣".into()),
        email: Some("josé@exämple.com".into()),
        ..User::default()
    };
    let errors = validator.validate(&user).unwrap();
    let properties: Vec<&str> = errors.iter().map(|e| e.property.as_str()).collect();
    assert_eq!(properties, vec!["username", "email"]);

    let user = User {
        username: Some("123".into()),
        email: Some("jose@example.com".into()),
        ..User::default()
    };
    assert!(validator.validate(&user).is_none());
}
