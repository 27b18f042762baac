// src/jobs.rs
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::info;

/// A job created through the API, as opposed to one scraped from the
/// upstream page. The two populations never mix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredJob {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
}

struct JobStoreInner {
    jobs: Vec<StoredJob>,
    next_id: u64,
}

/// In-memory list of created jobs. Ids come from a monotonic counter so a
/// delete followed by a create never reuses an id.
pub struct JobStore {
    inner: Mutex<JobStoreInner>,
}

impl JobStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(JobStoreInner {
                jobs: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn create(&self, new_job: NewJob) -> StoredJob {
        let mut inner = self.inner.lock().expect("job store lock poisoned");
        let job = StoredJob {
            id: inner.next_id,
            title: new_job.title,
            description: new_job.description,
            company: new_job.company,
            location: new_job.location,
            salary: new_job.salary,
        };
        inner.next_id += 1;
        inner.jobs.push(job.clone());
        info!("Created job {} ({})", job.id, job.title);
        job
    }

    pub fn get(&self, id: u64) -> Option<StoredJob> {
        let inner = self.inner.lock().expect("job store lock poisoned");
        inner.jobs.iter().find(|job| job.id == id).cloned()
    }

    /// Remove a job by id. Returns false when no such job exists.
    pub fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.lock().expect("job store lock poisoned");
        let before = inner.jobs.len();
        inner.jobs.retain(|job| job.id != id);
        inner.jobs.len() < before
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.lock().expect("job store lock poisoned");
        inner.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new()
    }
}
