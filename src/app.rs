//! Application core: key handling and the store submission workflow

use crate::api::{ApiError, StoreApi, StoreApiClient, DEFAULT_API_BASE};
use crate::config::TuiConfig;
use crate::state::{AppState, Form, NewStore, ProbeOutcome};
use crate::validate::{self, FieldId};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Completion events reported by spawned API tasks
#[derive(Debug)]
pub enum ApiEvent {
    /// A domain availability probe finished
    DomainChecked {
        seq: u64,
        result: Result<bool, ApiError>,
    },
    /// The store creation request finished
    StoreCreated { result: Result<(), ApiError> },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the storefront API
    api: Arc<dyn StoreApi>,
    /// Suffix appended to the subdomain label at submission time
    domain_suffix: String,
    events_tx: mpsc::UnboundedSender<ApiEvent>,
    events_rx: mpsc::UnboundedReceiver<ApiEvent>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let base_url = std::env::var("STOREFRONT_API_BASE")
            .ok()
            .or_else(|| config.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        tracing::info!(%base_url, "using storefront API");

        Ok(Self::with_api(
            Arc::new(StoreApiClient::new(base_url)),
            config.domain_suffix(),
        ))
    }

    /// Create an App against an arbitrary API implementation
    pub fn with_api(api: Arc<dyn StoreApi>, domain_suffix: &str) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            domain_suffix: domain_suffix.to_string(),
            events_tx,
            events_rx,
        }
    }

    /// The suffix shown next to the subdomain field
    pub fn domain_suffix(&self) -> &str {
        &self.domain_suffix
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Submit shortcut works from any field
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if !self.state.form.is_submit_row_active() => {
                self.state.form.get_active_field_mut().prev_option();
                self.after_field_edit();
            }
            KeyCode::Right if !self.state.form.is_submit_row_active() => {
                self.state.form.get_active_field_mut().next_option();
                self.after_field_edit();
            }
            KeyCode::Enter => {
                if self.state.form.is_submit_row_active() {
                    self.submit();
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Esc => {
                self.state.reset_form();
                self.state.notice = None;
            }
            KeyCode::Char(c) if !self.state.form.is_submit_row_active() => {
                self.state.form.get_active_field_mut().push_char(c);
                self.after_field_edit();
            }
            KeyCode::Backspace if !self.state.form.is_submit_row_active() => {
                self.state.form.get_active_field_mut().pop_char();
                self.after_field_edit();
            }
            _ => {}
        }
    }

    /// Per-edit bookkeeping: clear the field's error optimistically and
    /// feed the domain checker when the subdomain label changed.
    fn after_field_edit(&mut self) {
        if let Some(field_id) = self.state.form.active_field_id() {
            self.state.errors.clear(field_id);
            if field_id == FieldId::Domain {
                let label = self.state.form.domain.as_text().to_string();
                self.state.domain_check.input_changed(&label, Instant::now());
            }
        }
    }

    /// Fire the domain probe once the debounce window has elapsed
    pub fn tick(&mut self, now: Instant) {
        if let Some(probe) = self.state.domain_check.due_probe(now) {
            let api = Arc::clone(&self.api);
            let tx = self.events_tx.clone();
            tokio::spawn(async move {
                let result = api.check_domain(&probe.label).await;
                let _ = tx.send(ApiEvent::DomainChecked {
                    seq: probe.seq,
                    result,
                });
            });
        }
    }

    /// Apply all finished API tasks without blocking
    pub fn drain_api_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_api_event(event);
        }
    }

    /// Submit the form.
    ///
    /// Rejected outright while a request is in flight. Validation runs
    /// synchronously; any error aborts before the network is touched.
    pub fn submit(&mut self) {
        if self.state.submitting {
            return;
        }
        self.state.notice = None;

        let draft = self.state.form.to_draft();
        let errors = validate::validate(&draft, self.state.domain_check.status());
        if !errors.is_empty() {
            self.state.errors = errors;
            return;
        }
        self.state.errors = errors;

        self.state.submitting = true;
        let store = NewStore::from_draft(&draft, &self.domain_suffix);
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.create_store(&store).await;
            let _ = tx.send(ApiEvent::StoreCreated { result });
        });
    }

    /// Apply a finished API task to the application state
    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::DomainChecked { seq, result } => {
                let (outcome, message) = match &result {
                    Ok(true) => (ProbeOutcome::Available, None),
                    Ok(false) => (
                        ProbeOutcome::Unavailable,
                        Some("Not Available Domain, Re-enter!".to_string()),
                    ),
                    Err(err) => {
                        tracing::warn!("domain check failed: {err}");
                        (
                            ProbeOutcome::Failed,
                            Some(err.user_message("Domain check failed. Please try again.")),
                        )
                    }
                };
                // Stale probes are dropped here; only the live one lands
                if self.state.domain_check.apply(seq, outcome) {
                    match message {
                        Some(message) => self.state.errors.set(FieldId::Domain, message),
                        None => self.state.errors.clear(FieldId::Domain),
                    }
                }
            }
            ApiEvent::StoreCreated { result } => {
                self.state.submitting = false;
                match result {
                    Ok(()) => {
                        self.state.reset_form();
                        self.state.notice_success("Store created successfully!");
                    }
                    Err(err) => {
                        tracing::warn!("store creation failed: {err}");
                        let message =
                            err.user_message("Error creating store. Please check your inputs.");
                        if let Some(domain_error) = err.domain_message() {
                            self.state.errors.set(FieldId::Domain, domain_error.to_string());
                        } else if message.to_lowercase().contains("domain") {
                            self.state.errors.set(FieldId::Domain, message.clone());
                        }
                        self.state.notice_error(message);
                    }
                }
            }
        }
    }

    /// Await the next API task completion; used by tests to step the
    /// workflow deterministically.
    #[cfg(test)]
    async fn recv_api_event(&mut self) -> Option<ApiEvent> {
        self.events_rx.recv().await
    }
}
