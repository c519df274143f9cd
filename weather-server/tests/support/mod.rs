//! Shared fixtures for the HTTP tests: an in-memory store and an app builder.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web,
};
use async_trait::async_trait;
use chrono::Utc;
use weather_core::{NewWeatherRecord, StoreError, WeatherProvider, WeatherRecord, WeatherStore};
use weather_server::{AppState, api_doc, build_app};

/// [`WeatherStore`] keeping rows in a vector; ids and timestamps are assigned
/// on insert like the database does. Missing timestamps sort last.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<WeatherRecord>>,
    schema_calls: AtomicUsize,
    broken: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails like an unreachable database.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().expect("rows lock").len()
    }

    pub fn schema_calls(&self) -> usize {
        self.schema_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.broken {
            Err(StoreError::Config("database unavailable".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl WeatherStore for MemoryStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        self.check()
    }

    async fn insert(&self, record: &NewWeatherRecord) -> Result<WeatherRecord, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().expect("rows lock");
        let stored = WeatherRecord {
            id: i32::try_from(rows.len() + 1).expect("id fits"),
            city: record.city.clone(),
            temperature: record.temperature,
            feels_like: record.feels_like,
            humidity: record.humidity,
            description: record.description.clone(),
            recorded_at: Some(Utc::now()),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_recent_first(&self) -> Result<Vec<WeatherRecord>, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().expect("rows lock").clone();
        rows.sort_by(|a, b| {
            b.recorded_at
                .cmp(&a.recorded_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(rows)
    }
}

/// The production app around `state`, docs included.
pub fn test_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    build_app(web::Data::new(state), api_doc(3001))
}

pub fn state_with(store: Arc<MemoryStore>, provider: Option<Arc<dyn WeatherProvider>>) -> AppState {
    AppState::new(store, provider)
}
