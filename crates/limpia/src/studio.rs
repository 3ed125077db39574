//! Main Studio facade tying session, backend, and workbench together.

use std::path::Path;

use crate::backend::{
    Backend, CleanResponse, CleanedDatasetSummary, DatasetId, DatasetSummary, HealthStatus,
    ModelSummary, TrainRequest, TrainResponse, UploadResponse,
};
use crate::error::{LimpiaError, Result};
use crate::gate::{Action, ActionGate};
use crate::session::Session;
use crate::upload::validate_upload;
use crate::workbench::Workbench;

/// The dashboard client: one user session against one backend, with at most
/// one dataset open for cleaning at a time.
///
/// Every action class is gated against duplicate submission, and analysis
/// responses are keyed by dataset id so a response for a stale selection is
/// discarded rather than installed.
pub struct Studio {
    session: Session,
    backend: Box<dyn Backend>,
    gate: ActionGate,
    workbench: Option<Workbench>,
}

impl Studio {
    /// Create a studio for a session against the given backend.
    pub fn new(backend: Box<dyn Backend>, session: Session) -> Self {
        Self {
            session,
            backend,
            gate: ActionGate::new(),
            workbench: None,
        }
    }

    /// The client session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Name of the configured backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// The currently open workbench, if any.
    pub fn workbench(&self) -> Option<&Workbench> {
        self.workbench.as_ref()
    }

    /// Mutable access to the open workbench, if any.
    pub fn workbench_mut(&mut self) -> Option<&mut Workbench> {
        self.workbench.as_mut()
    }

    /// List the session's datasets.
    pub fn datasets(&self) -> Result<Vec<DatasetSummary>> {
        self.backend.datasets(&self.session)
    }

    /// List the session's cleaned datasets.
    pub fn cleaned_datasets(&self) -> Result<Vec<CleanedDatasetSummary>> {
        self.backend.cleaned_datasets(&self.session)
    }

    /// Column names of a cleaned dataset.
    pub fn cleaned_columns(&self, dataset_id: DatasetId) -> Result<Vec<String>> {
        self.backend.cleaned_columns(&self.session, dataset_id)
    }

    /// List the session's trained models.
    pub fn models(&self) -> Result<Vec<ModelSummary>> {
        self.backend.models(&self.session)
    }

    /// Probe backend health.
    pub fn health(&self) -> Result<HealthStatus> {
        self.backend.health()
    }

    /// Analyze a dataset and open a fresh workbench for it, discarding any
    /// previous one. The pending queue starts empty and the preview page is
    /// back at 1.
    pub fn open_dataset(&mut self, dataset_id: DatasetId) -> Result<&Workbench> {
        let _guard = self.gate.begin(Action::Analyze)?;
        let response = self.backend.analyze(&self.session, dataset_id)?;
        if response.dataset_id != dataset_id {
            return Err(LimpiaError::StaleAnalysis {
                requested: dataset_id,
                received: response.dataset_id,
            });
        }
        self.workbench = Some(Workbench::from_analysis(response));
        Ok(self.workbench.as_ref().unwrap())
    }

    /// Apply a cleaning operation to the open workbench's preview.
    pub fn apply(&mut self, operation: crate::transform::CleanOperation) -> Result<()> {
        match self.workbench.as_mut() {
            Some(workbench) => {
                workbench.apply(operation);
                Ok(())
            }
            None => Err(LimpiaError::Validation(
                "no dataset is open for cleaning".into(),
            )),
        }
    }

    /// Discard the open workbench's preview and queue.
    pub fn reset_preview(&mut self) -> Result<()> {
        match self.workbench.as_mut() {
            Some(workbench) => {
                workbench.reset();
                Ok(())
            }
            None => Err(LimpiaError::Validation(
                "no dataset is open for cleaning".into(),
            )),
        }
    }

    /// Persist the pending operations, then re-fetch the authoritative
    /// analysis. The locally simulated preview is never trusted after a
    /// save; the fresh snapshot replaces the whole workbench.
    pub fn save(&mut self) -> Result<CleanResponse> {
        let _guard = self.gate.begin(Action::Save)?;
        let (request, dataset_id) = match self.workbench.as_ref() {
            Some(workbench) => (
                workbench.clean_request(&self.session)?,
                workbench.dataset_id(),
            ),
            None => {
                return Err(LimpiaError::Validation(
                    "no dataset is open for cleaning".into(),
                ));
            }
        };

        let outcome = self.backend.clean(&self.session, &request)?;

        let response = self.backend.analyze(&self.session, dataset_id)?;
        if response.dataset_id != dataset_id {
            return Err(LimpiaError::StaleAnalysis {
                requested: dataset_id,
                received: response.dataset_id,
            });
        }
        self.workbench = Some(Workbench::from_analysis(response));
        Ok(outcome)
    }

    /// Validate and upload a local file.
    pub fn upload(&self, path: impl AsRef<Path>) -> Result<UploadResponse> {
        let _guard = self.gate.begin(Action::Upload)?;
        let file = validate_upload(path)?;
        self.backend.upload(&self.session, &file)
    }

    /// Validate and submit a training request.
    pub fn train(&self, request: &TrainRequest) -> Result<TrainResponse> {
        let _guard = self.gate.begin(Action::Train)?;
        request.validate()?;
        self.backend.train(&self.session, request)
    }
}
