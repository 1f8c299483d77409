//! Test doubles for the resource engine.
//!
//! `MockSource` serves canned bytes (or a canned failure) and counts how
//! often it was read, so callers can assert on single-flight loading.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{SourceError, SourceResult};
use crate::traits::ResourceSource;
use crate::types::{Resource, ResourceDocument};

/// Configurable in-memory source for tests.
///
/// Clones share the fetch counter.
#[derive(Clone)]
pub struct MockSource {
    body: Option<Vec<u8>>,
    delay: Option<Duration>,
    fetches: Arc<AtomicUsize>,
}

impl MockSource {
    /// Serve the given JSON text.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            body: Some(json.into().into_bytes()),
            delay: None,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Serve a well-formed document containing `resources`.
    pub fn with_resources(resources: Vec<Resource>) -> Self {
        let document = ResourceDocument { resources };
        let json = serde_json::to_string(&document).unwrap_or_default();
        Self::with_json(json)
    }

    /// Every fetch fails with an I/O error.
    pub fn failing() -> Self {
        Self {
            body: None,
            delay: None,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Sleep before answering, to keep a load in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of times `fetch` was called.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceSource for MockSource {
    async fn fetch(&self) -> SourceResult<Vec<u8>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.body.clone().ok_or_else(|| {
            SourceError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "mock source has no document",
            ))
        })
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// A small labor-rights collection covering every canonical category.
pub fn sample_resources() -> Vec<Resource> {
    vec![
        Resource::new("derechos-fundamentales", "Derechos")
            .with_title("Derechos fundamentales del trabajador")
            .with_content("Todo trabajador tiene derecho a un salario justo y a la seguridad social."),
        Resource::new("contrato-termino-fijo", "Laboral")
            .with_subcategory("Contratos")
            .with_title("Contrato a término fijo")
            .with_content("El contrato de trabajo a término fijo no puede superar tres años."),
        Resource::new("contrato-obra-labor", "Laboral")
            .with_subcategory("Contratos")
            .with_title("Contrato por obra o labor")
            .with_content("Termina cuando finaliza la obra contratada."),
        Resource::new("afiliacion-eps", "Seguridad Social")
            .with_question("¿Cómo me afilio a una EPS?")
            .with_content("La afiliación a salud es obligatoria para todo contrato laboral."),
        Resource::new("despido-sin-justa-causa", "Terminación de contrato laboral")
            .with_title("Despido sin justa causa")
            .with_content("El despido sin justa causa genera indemnización y liquidación de prestaciones."),
        Resource::new("semanas-pension", "Pensión")
            .with_question("¿Cuántas semanas necesito para la pensión?")
            .with_content("Para la pensión de vejez se requieren 1300 semanas."),
        Resource::new("queja-ministerio", "Tramites")
            .with_subcategory("Ministerio del Trabajo")
            .with_title("Queja ante el Ministerio del Trabajo")
            .with_content("Procedimiento para radicar una queja por incumplimiento."),
    ]
}
