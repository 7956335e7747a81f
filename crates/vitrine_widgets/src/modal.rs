//! Certificate detail modal

use vitrine_core::events::{event_types, Event, EventData, KeyCode};

use crate::certificates::{self, Certificate};

/// What the modal displays for an open certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: &'static str,
    pub date: &'static str,
    pub institution: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub image_src: &'static str,
    pub image_alt: &'static str,
    pub download_href: &'static str,
    pub download_name: String,
}

impl From<&'static Certificate> for ModalView {
    fn from(cert: &'static Certificate) -> Self {
        Self {
            title: cert.title,
            date: cert.date,
            institution: cert.institution,
            kind: cert.kind,
            description: cert.description,
            image_src: cert.image,
            image_alt: cert.title,
            download_href: cert.download_url,
            download_name: cert.download_name(),
        }
    }
}

/// Modal open/closed state plus the page's body scroll lock
#[derive(Debug, Clone, Default)]
pub struct CertificateModal {
    open: Option<&'static Certificate>,
}

impl CertificateModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.open.is_some()
    }

    /// Body scrolling is locked while the modal is active
    pub fn body_scroll_locked(&self) -> bool {
        self.is_active()
    }

    pub fn current(&self) -> Option<&'static Certificate> {
        self.open
    }

    /// Show certificate `id`; unknown ids leave the modal as it was
    pub fn open(&mut self, id: &str) -> Option<ModalView> {
        let Some(cert) = certificates::lookup(id) else {
            tracing::debug!(id, "unknown certificate");
            return None;
        };
        self.open = Some(cert);
        tracing::debug!(id, "certificate modal opened");
        Some(ModalView::from(cert))
    }

    pub fn close(&mut self) {
        if self.open.take().is_some() {
            tracing::debug!("certificate modal closed");
        }
    }

    /// Escape closes an open modal
    pub fn on_key_down(&mut self, key: KeyCode) -> bool {
        if key == KeyCode::ESCAPE && self.is_active() {
            self.close();
            return true;
        }
        false
    }

    /// Click on the modal; only the backdrop itself closes it
    pub fn on_click(&mut self, on_backdrop: bool) -> bool {
        if on_backdrop && self.is_active() {
            self.close();
            return true;
        }
        false
    }

    /// Route a key or click event; clicks whose target is `backdrop` close
    pub fn handle_event(&mut self, event: &Event, backdrop: u64) -> bool {
        match (event.event_type, &event.data) {
            (event_types::KEY_DOWN, EventData::Key { key }) => self.on_key_down(*key),
            (event_types::CLICK, _) => self.on_click(event.target == backdrop),
            _ => false,
        }
    }
}
