use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    errors::ServiceError,
    events::{Event, EventSender},
    models::SiteSettings,
    store::CatalogStore,
};

/// Site settings service. Updates merge into the singleton document, the way
/// the admin panel writes it: provided fields overwrite, absent fields keep
/// their current value.
#[derive(Clone)]
pub struct SettingsService {
    store: Arc<CatalogStore>,
    event_sender: EventSender,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsInput {
    pub theme_color: Option<String>,
    pub footer_color: Option<String>,
    pub announcement_text: Option<String>,
}

impl SettingsService {
    pub fn new(store: Arc<CatalogStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
        }
    }

    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<SiteSettings, ServiceError> {
        Ok(self.store.settings().await)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, input: UpdateSettingsInput) -> Result<SiteSettings, ServiceError> {
        for color in [input.theme_color.as_deref(), input.footer_color.as_deref()]
            .into_iter()
            .flatten()
        {
            ensure_hex_color(color)?;
        }

        let updated = self
            .store
            .update_settings(|settings| {
                if let Some(theme_color) = input.theme_color {
                    settings.theme_color = Some(theme_color);
                }
                if let Some(footer_color) = input.footer_color {
                    settings.footer_color = Some(footer_color);
                }
                if let Some(announcement_text) = input.announcement_text {
                    settings.announcement_text = Some(announcement_text);
                }
            })
            .await;

        self.event_sender.send_or_log(Event::SettingsUpdated).await;
        info!("Updated site settings");
        Ok(updated)
    }
}

/// The admin color pickers only ever produce `#rrggbb`.
fn ensure_hex_color(value: &str) -> Result<(), ServiceError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(ServiceError::ValidationError(format!(
            "\"{}\" is not a #rrggbb color",
            value
        )));
    }
    Ok(())
}
