use hashbrown::HashMap;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    core::{query, seed},
    doctor::{DoctorDraft, DoctorRecord},
    error::StoreError,
    types::{DoctorId, PaginationMode},
    validate::validate_draft,
};

/// Ordered export of every record held by a [`DoctorStore`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreSnapshotV1 {
    /// Records in insertion order.
    pub records: Vec<DoctorRecord>,
}

/// Authoritative in-memory collection of doctor records.
///
/// Records keep insertion order; `update` replaces a record in place and
/// `delete` removes it irrevocably. Every read returns owned copies.
#[derive(Debug, Default)]
pub struct DoctorStore {
    records: HashMap<DoctorId, DoctorRecord>,
    order: Vec<DoctorId>,
    pos: HashMap<DoctorId, usize>,
    pagination: PaginationMode,
}

impl DoctorStore {
    /// Creates an empty store using [`PaginationMode::Slice`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the five built-in demo doctors.
    pub fn with_seed_data() -> Result<Self, StoreError> {
        Self::from_snapshot(seed::seed_snapshot()?)
    }

    /// Rebuilds a store from an exported snapshot.
    ///
    /// Every record is re-validated and ids must be non-empty and unique.
    pub fn from_snapshot(snapshot: StoreSnapshotV1) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for rec in snapshot.records {
            if rec.id.is_empty() {
                return Err(StoreError::InvalidId(rec.id));
            }
            validate_draft(&rec.to_draft())?;
            if store.records.contains_key(&rec.id) {
                return Err(StoreError::DuplicateId(rec.id));
            }
            store.push(rec);
        }
        debug!(
            "event=store_restore module=store status=ok records={}",
            store.order.len()
        );
        Ok(store)
    }

    /// Exports all records in insertion order.
    pub fn export_snapshot(&self) -> StoreSnapshotV1 {
        StoreSnapshotV1 {
            records: self.all_cloned(),
        }
    }

    /// Selects how [`DoctorStore::list`] treats its window.
    pub fn set_pagination(&mut self, mode: PaginationMode) {
        self.pagination = mode;
    }

    /// Current pagination mode.
    pub fn pagination(&self) -> PaginationMode {
        self.pagination
    }

    /// Lists a window of records.
    ///
    /// Under [`PaginationMode::IgnoreWindow`] the whole collection comes back
    /// regardless of `page` and `limit`.
    pub fn list(&self, page: usize, limit: usize) -> Vec<DoctorRecord> {
        let out: Vec<DoctorRecord> = match self.pagination {
            PaginationMode::Slice => query::page_slice(&self.order, page, limit)
                .iter()
                .filter_map(|id| self.records.get(id).cloned())
                .collect(),
            PaginationMode::IgnoreWindow => self.all_cloned(),
        };
        debug!(
            "event=doctor_list module=store status=ok page={} limit={} returned={}",
            page,
            limit,
            out.len()
        );
        out
    }

    /// Borrows the record with `id`.
    pub fn get(&self, id: &str) -> Option<&DoctorRecord> {
        self.records.get(id)
    }

    /// Copies the record with `id`, failing with [`StoreError::NotFound`].
    pub fn get_cloned(&self, id: &str) -> Result<DoctorRecord, StoreError> {
        self.get(id).cloned().ok_or_else(|| not_found("doctor_get", id))
    }

    /// Validates `draft`, assigns a fresh unique id, and appends the record.
    pub fn create(&mut self, draft: DoctorDraft) -> Result<DoctorRecord, StoreError> {
        if let Err(errors) = validate_draft(&draft) {
            warn!(
                "event=doctor_create module=store status=error error_code=validation fields={}",
                errors.len()
            );
            return Err(errors.into());
        }

        let id = self.fresh_id();
        let rec = DoctorRecord::from_draft(id, draft);
        self.push(rec.clone());
        info!(
            "event=doctor_create module=store status=ok id={} total={}",
            rec.id,
            self.order.len()
        );
        Ok(rec)
    }

    /// Replaces every non-id attribute of `id`, keeping its position.
    pub fn update(&mut self, id: &str, draft: DoctorDraft) -> Result<DoctorRecord, StoreError> {
        if let Err(errors) = validate_draft(&draft) {
            warn!(
                "event=doctor_update module=store status=error error_code=validation id={} fields={}",
                id,
                errors.len()
            );
            return Err(errors.into());
        }

        let rec = self
            .records
            .get_mut(id)
            .ok_or_else(|| not_found("doctor_update", id))?;
        *rec = DoctorRecord::from_draft(rec.id.clone(), draft);
        info!("event=doctor_update module=store status=ok id={}", id);
        Ok(rec.clone())
    }

    /// Removes `id`, returning the removed record.
    pub fn delete(&mut self, id: &str) -> Result<DoctorRecord, StoreError> {
        let idx = self
            .pos
            .remove(id)
            .ok_or_else(|| not_found("doctor_delete", id))?;
        self.order.remove(idx);
        for (offset, later) in self.order[idx..].iter().enumerate() {
            self.pos.insert(later.clone(), idx + offset);
        }
        let rec = self
            .records
            .remove(id)
            .ok_or_else(|| not_found("doctor_delete", id))?;
        info!(
            "event=doctor_delete module=store status=ok id={} total={}",
            id,
            self.order.len()
        );
        Ok(rec)
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True when a record with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// The last `n` records in insertion order.
    pub fn recent(&self, n: usize) -> Vec<&DoctorRecord> {
        let len = self.order.len();
        let start = len.saturating_sub(n);
        self.order[start..]
            .iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    /// Owned copy of [`DoctorStore::recent`].
    pub fn recent_cloned(&self, n: usize) -> Vec<DoctorRecord> {
        self.recent(n).into_iter().cloned().collect()
    }

    /// Records matching `term`, see [`query::matches_term`].
    pub fn search_cloned(&self, term: &str) -> Vec<DoctorRecord> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .filter(|rec| query::matches_term(rec, term))
            .cloned()
            .collect()
    }

    /// Ids in insertion order.
    pub fn ordered_ids(&self) -> &[DoctorId] {
        &self.order
    }

    fn all_cloned(&self) -> Vec<DoctorRecord> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect()
    }

    fn push(&mut self, rec: DoctorRecord) {
        self.pos.insert(rec.id.clone(), self.order.len());
        self.order.push(rec.id.clone());
        self.records.insert(rec.id.clone(), rec);
    }

    fn fresh_id(&self) -> DoctorId {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if !self.records.contains_key(&id) {
                return id;
            }
        }
    }
}

fn not_found(event: &str, id: &str) -> StoreError {
    warn!(
        "event={} module=store status=error error_code=not_found id={}",
        event, id
    );
    StoreError::NotFound(id.to_string())
}
