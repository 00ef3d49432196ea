//! Validation utilities for user input
//!
//! Messages are the ones shown next to the forms, in Spanish.

use crate::session::RegisterForm;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("El correo es obligatorio");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Formato de correo inválido");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Formato de correo inválido");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Dominio de correo inválido");
    }

    ValidationResult::ok()
}

/// Both login fields must be filled in.
pub fn validate_login(email: &str, password: &str) -> ValidationResult {
    if email.trim().is_empty() || password.is_empty() {
        return ValidationResult::err("Por favor ingresa correo y contraseña");
    }
    ValidationResult::ok()
}

/// Validate the registration form
pub fn validate_register(form: &RegisterForm, confirm_password: &str) -> ValidationResult {
    let required = [
        form.cedula.trim(),
        form.nombre.trim(),
        form.email.trim(),
        form.telefono.trim(),
        form.effective_direccion().trim(),
        form.effective_password(),
    ];
    if required.iter().any(|value| value.is_empty()) {
        return ValidationResult::err("Por favor completa todos los campos obligatorios");
    }

    let email = validate_email(&form.email);
    if !email.is_valid {
        return email;
    }

    if form.effective_password().chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::err(format!(
            "La contraseña debe tener al menos {} caracteres",
            MIN_PASSWORD_LEN
        ));
    }

    if form.effective_password() != confirm_password {
        return ValidationResult::err("Las contraseñas no coinciden");
    }

    ValidationResult::ok()
}

/// Validate the change-password form
pub fn validate_password_change(old: &str, new: &str, confirm: &str) -> ValidationResult {
    if old.is_empty() || new.is_empty() || confirm.is_empty() {
        return ValidationResult::err("Por favor completa todos los campos");
    }

    if new != confirm {
        return ValidationResult::err("Las contraseñas nuevas no coinciden");
    }

    if new.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::err(format!(
            "La nueva contraseña debe tener al menos {} caracteres",
            MIN_PASSWORD_LEN
        ));
    }

    if old == new {
        return ValidationResult::err("La nueva contraseña debe ser diferente a la actual");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> RegisterForm {
        RegisterForm {
            cedula: "0912345678".into(),
            nombre: "Ana".into(),
            email: "ana@example.com".into(),
            telefono: "0991234567".into(),
            password: "secreto".into(),
            direccion: "Av. Central 1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@example.com").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("ana.example.com").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("ana@localhost").is_valid);
    }

    #[test]
    fn test_validate_login_requires_both_fields() {
        assert!(validate_login("a@b.co", "x").is_valid);

        let result = validate_login("  ", "x");
        assert_eq!(result.error.as_deref(), Some("Por favor ingresa correo y contraseña"));
        assert!(!validate_login("a@b.co", "").is_valid);
    }

    #[test]
    fn test_validate_register() {
        let form = complete_form();
        assert!(validate_register(&form, "secreto").is_valid);

        let mismatch = validate_register(&form, "otro123");
        assert_eq!(mismatch.error.as_deref(), Some("Las contraseñas no coinciden"));

        let mut legacy = complete_form();
        legacy.password.clear();
        legacy.contrasena = "legacy1".into();
        assert!(validate_register(&legacy, "legacy1").is_valid);

        let mut missing = complete_form();
        missing.cedula.clear();
        assert!(!validate_register(&missing, "secreto").is_valid);

        let mut short = complete_form();
        short.password = "abc".into();
        assert!(!validate_register(&short, "abc").is_valid);
    }

    #[test]
    fn test_validate_password_change_rules() {
        assert!(validate_password_change("viejo1", "nuevo1", "nuevo1").is_valid);

        assert_eq!(
            validate_password_change("", "nuevo1", "nuevo1").error.as_deref(),
            Some("Por favor completa todos los campos")
        );
        assert_eq!(
            validate_password_change("viejo1", "nuevo1", "nuevo2").error.as_deref(),
            Some("Las contraseñas nuevas no coinciden")
        );
        assert!(!validate_password_change("viejo1", "abc", "abc").is_valid);
        assert_eq!(
            validate_password_change("mismo1", "mismo1", "mismo1").error.as_deref(),
            Some("La nueva contraseña debe ser diferente a la actual")
        );
    }
}
