//! Form and input elements of the document contract.

use crate::error::DashboardError;

/// A text input identified by element id.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    id: String,
    value: String,
}

impl InputField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current value, as-is. No trimming or emptiness checks happen here or
    /// anywhere downstream.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// The team-mapping form. Carries no field state itself (the inputs are
/// separate document elements); it only tracks listener registration, which
/// must happen exactly once.
#[derive(Debug, Clone, Default)]
pub struct MappingForm {
    id: String,
    listener_attached: bool,
}

impl MappingForm {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            listener_attached: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attach_listener(&mut self) -> Result<(), DashboardError> {
        if self.listener_attached {
            return Err(DashboardError::FormError(format!(
                "submission listener already attached to {}",
                self.id
            )));
        }
        self.listener_attached = true;
        Ok(())
    }

    pub fn has_listener(&self) -> bool {
        self.listener_attached
    }
}

/// A form submission event. The handler must prevent the default action so
/// the host does not navigate away.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
