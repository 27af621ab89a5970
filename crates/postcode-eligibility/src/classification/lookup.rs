use super::postcode::Postcode;
use super::record::{ClassificationRecord, Dataset};
use super::tables::VisaSubclass;
use crate::error::AppError;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Classification of `postcode` as served to callers.
///
/// Unknown postcodes read as all-false. For subclass 462 a northern postcode
/// also satisfies the regional requirement; that rule shapes the returned copy
/// only and is never written back.
pub fn lookup(
    dataset: &Dataset,
    postcode: Postcode,
    visa: Option<VisaSubclass>,
) -> ClassificationRecord {
    let mut record = dataset.classification(postcode).unwrap_or_default();
    if visa == Some(VisaSubclass::WorkAndHoliday462) && record.northern {
        record.regional = true;
    }
    record
}

/// The snapshot currently served; replaced whole after each successful update.
#[derive(Debug, Clone, Default)]
pub struct SharedSnapshot {
    inner: Arc<RwLock<Dataset>>,
}

impl SharedSnapshot {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dataset)),
        }
    }

    pub fn lookup(&self, postcode: Postcode, visa: Option<VisaSubclass>) -> ClassificationRecord {
        let guard = self.inner.read().expect("snapshot lock poisoned");
        lookup(&guard, postcode, visa)
    }

    pub fn replace(&self, dataset: Dataset) {
        let mut guard = self.inner.write().expect("snapshot lock poisoned");
        *guard = dataset;
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("snapshot lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw query string; the subclass is validated in the handler so a bad value
/// gets the same JSON error body as a bad postcode.
#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    pub visa: Option<String>,
}

impl LookupQuery {
    pub fn visa(&self) -> Result<Option<VisaSubclass>, AppError> {
        self.visa
            .as_deref()
            .map(|raw| {
                VisaSubclass::from_code(raw)
                    .ok_or_else(|| AppError::UnsupportedVisa(raw.to_string()))
            })
            .transpose()
    }
}

/// Router builder exposing the per-postcode lookup.
pub fn lookup_router(snapshot: SharedSnapshot) -> Router {
    Router::new()
        .route("/api/check/:postcode", get(check_handler))
        .with_state(snapshot)
}

async fn check_handler(
    State(snapshot): State<SharedSnapshot>,
    Path(raw): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<ClassificationRecord>, AppError> {
    let postcode: Postcode = raw.parse()?;
    let visa = query.visa()?;
    debug!(postcode = %postcode, visa = ?visa, "postcode lookup");
    Ok(Json(snapshot.lookup(postcode, visa)))
}
