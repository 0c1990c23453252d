use super::*;

fn filled() -> EmployeeForm {
    EmployeeForm {
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        email: " grace@example.com ".to_owned(),
        password: "initial-pass".to_owned(),
        ..EmployeeForm::default()
    }
}

#[test]
fn new_employee_defaults_to_employee_role() {
    let draft = validate_employee(&filled()).unwrap();
    assert_eq!(draft.user_type, UserType::Employee);
    assert_eq!(draft.email, "grace@example.com");
    assert_eq!(draft.department, None);
}

#[test]
fn admin_role_is_kept() {
    let form = EmployeeForm { user_type: UserType::Admin, department: "IT".to_owned(), ..filled() };
    let draft = validate_employee(&form).unwrap();
    assert_eq!(draft.user_type, UserType::Admin);
    assert_eq!(draft.department.as_deref(), Some("IT"));
}

#[test]
fn incomplete_forms_are_rejected() {
    assert!(validate_employee(&EmployeeForm { first_name: String::new(), ..filled() }).is_err());
    assert!(validate_employee(&EmployeeForm { email: "grace".to_owned(), ..filled() }).is_err());
    assert!(validate_employee(&EmployeeForm { password: String::new(), ..filled() }).is_err());
}

#[test]
fn is_self_matches_signed_in_user() {
    let employee: Employee = serde_json::from_value(serde_json::json!({
        "employeeId": 9,
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace@example.com",
        "userType": "admin",
    }))
    .unwrap();
    assert!(is_self(&employee, Some("9")));
    assert!(!is_self(&employee, Some("10")));
    assert!(!is_self(&employee, None));
}
