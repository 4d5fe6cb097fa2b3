//! User-facing notifications for registration outcomes

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A toast-style message shown once per completed submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notification {
    pub fn material_created(code: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: format!("Material {} cadastrado com sucesso!", code),
            description: None,
        }
    }

    pub fn registration_failed() -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: "Erro ao cadastrar material!".to_string(),
            description: Some("Tente novamente em alguns instantes.".to_string()),
        }
    }
}

/// Presents notifications to the user
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}
