//! crates/ailearn_core/src/shell.rs
//!
//! The page shell's UI state: which page is shown and which modals are open.
//! Transitions are plain functions over owned state; renderers only ever see
//! an immutable snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::CatalogCourse;

//=========================================================================================
// Routes
//=========================================================================================

/// The two pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Blog,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Blog => "/blog",
        }
    }

    /// Exact match only; anything else has no page.
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/blog" => Some(Self::Blog),
            _ => None,
        }
    }
}

//=========================================================================================
// Modal state machine
//=========================================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Triggers the page exposes for opening, closing and switching modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    OpenAddCourse,
    CloseAddCourse,
    CourseSubmitted,
    OpenAuth,
    ToggleAuthMode,
    CloseAuth,
    AuthSubmitted,
}

/// Visibility of the two modals. They are independent of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalState {
    #[serde(default)]
    pub add_course: bool,
    #[serde(default)]
    pub auth: Option<AuthMode>,
}

impl ModalState {
    pub fn apply(self, event: ShellEvent) -> Self {
        match event {
            ShellEvent::OpenAddCourse => Self {
                add_course: true,
                ..self
            },
            ShellEvent::CloseAddCourse | ShellEvent::CourseSubmitted => Self {
                add_course: false,
                ..self
            },
            ShellEvent::OpenAuth => Self {
                auth: Some(self.auth.unwrap_or_default()),
                ..self
            },
            ShellEvent::ToggleAuthMode => Self {
                auth: self.auth.map(AuthMode::toggled),
                ..self
            },
            ShellEvent::CloseAuth | ShellEvent::AuthSubmitted => Self { auth: None, ..self },
        }
    }

    /// Query-string form used in links, `""` when everything is closed.
    pub fn to_query(self) -> String {
        let mut params = Vec::new();
        if self.add_course {
            params.push("add_course=true".to_string());
        }
        if let Some(mode) = self.auth {
            params.push(format!("auth={}", mode.as_str()));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

//=========================================================================================
// Auth form payload
//=========================================================================================

/// What the auth modal collects. Never stored and never logged.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only asked for in sign-up mode.
    pub full_name: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .finish()
    }
}

//=========================================================================================
// Snapshot
//=========================================================================================

/// Immutable view of the shell handed to renderers: the catalog as it stands
/// and one visitor's modal state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellSnapshot {
    pub courses: Vec<CatalogCourse>,
    pub modals: ModalState,
}
