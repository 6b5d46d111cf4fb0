//! Tests for user domain models.

#[cfg(test)]
mod tests {
    use crate::users::User;

    #[test]
    fn password_is_never_serialized() {
        let user = User {
            id: Some(1),
            name: "nome".to_string(),
            email: "email@email.com".to_string(),
            password: "senha".to_string(),
            recorded_at: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "email@email.com");
        assert_eq!(json["name"], "nome");
    }

    #[test]
    fn unsaved_user_omits_the_id_field() {
        let user = User {
            name: "nome".to_string(),
            email: "email@email.com".to_string(),
            ..User::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn user_deserializes_without_a_password_field() {
        let user: User =
            serde_json::from_str(r#"{"name":"nome","email":"email@email.com","recordedAt":null}"#)
                .unwrap();
        assert_eq!(user.email, "email@email.com");
        assert_eq!(user.password, "");
    }
}
