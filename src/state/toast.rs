//! Transient notifications.
//!
//! DESIGN
//! ======
//! Components push toasts into shared state; the `Toaster` component renders
//! them and schedules their dismissal. Only the newest few are kept.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const TOAST_LIMIT: usize = 3;
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

/// A toast before it is assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn success(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: Some(description.to_owned()), variant: ToastVariant::Default }
    }

    pub fn info(title: &str) -> Self {
        Self { title: title.to_owned(), description: None, variant: ToastVariant::Default }
    }

    /// Error toast with the usual "Error" title.
    pub fn error(description: &str) -> Self {
        Self {
            title: "Error".to_owned(),
            description: Some(description.to_owned()),
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Add a toast, evicting the oldest past [`TOAST_LIMIT`]. Returns its id.
    pub fn push(&mut self, message: ToastMessage) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, title: message.title, description: message.description, variant: message.variant });
        if self.items.len() > TOAST_LIMIT {
            let excess = self.items.len() - TOAST_LIMIT;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Push `message` into the shared toast state and schedule its dismissal.
pub fn notify(toasts: leptos::prelude::RwSignal<ToastState>, message: ToastMessage) {
    use leptos::prelude::Update;

    let mut id = 0;
    toasts.update(|t| id = t.push(message));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}
