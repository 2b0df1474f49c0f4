use std::sync::Arc;

use crate::config::Config;
use crate::directory::{Airport, Directory};
use crate::error::AppResult;
use crate::form::{BookingForm, FormRegions};
use crate::input::KeymapPreset;
use crate::lookup::CandidateSource;

/// Last outcome worth telling the operator about. Empty shows key hints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusState {
    pub message: String,
}

impl StatusState {
    pub(crate) fn set(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub(crate) fn clear(&mut self) {
        self.message.clear();
    }
}

pub struct App {
    pub form: BookingForm,
    pub status: StatusState,
    pub config: Config,
    pub(crate) keymap: KeymapPreset,
    /// Captured on every draw; pointer events are resolved against it.
    pub(crate) regions: FormRegions,
}

impl App {
    pub fn new(directory: &Directory) -> AppResult<Self> {
        let config = Config::load()?;
        Self::new_with_config(directory, config)
    }

    pub fn new_with_config(directory: &Directory, config: Config) -> AppResult<Self> {
        let form = BookingForm::new(directory, &config.picker)?;
        Ok(Self::from_parts(form, config))
    }

    /// Builds the app with airport lookups served by `airports` instead of
    /// the directory's own index.
    pub fn with_airport_source(
        directory: &Directory,
        config: Config,
        airports: Arc<dyn CandidateSource<Airport>>,
    ) -> AppResult<Self> {
        let form = BookingForm::with_airport_source(directory, &config.picker, airports)?;
        Ok(Self::from_parts(form, config))
    }

    fn from_parts(form: BookingForm, config: Config) -> Self {
        let keymap = KeymapPreset::parse(&config.keymap.preset);
        Self {
            form,
            status: StatusState::default(),
            config,
            keymap,
            regions: FormRegions::default(),
        }
    }
}
