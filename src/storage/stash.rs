//! Stash goal repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::info;

use crate::error::EclosionError;
use crate::models::{StashGoal, StashGoalId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct StashData {
    #[serde(default)]
    goals: Vec<StashGoal>,
}

fn lock_error(e: impl std::fmt::Display) -> EclosionError {
    EclosionError::Storage(format!("Failed to acquire stash lock: {}", e))
}

pub struct StashRepository {
    path: PathBuf,
    goals: RwLock<HashMap<StashGoalId, StashGoal>>,
}

impl StashRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            goals: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), EclosionError> {
        let file_data: StashData = read_json(&self.path)?;
        let mut goals = self.goals.write().map_err(lock_error)?;

        goals.clear();
        for goal in file_data.goals {
            goals.insert(goal.id, goal);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), EclosionError> {
        let goals = self.goals.read().map_err(lock_error)?;

        let mut list: Vec<_> = goals.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        info!(count = list.len(), "saving stash goals");
        write_json_atomic(&self.path, &StashData { goals: list })
    }

    pub fn get(&self, id: StashGoalId) -> Result<Option<StashGoal>, EclosionError> {
        let goals = self.goals.read().map_err(lock_error)?;
        Ok(goals.get(&id).cloned())
    }

    /// Find a goal by name (case-insensitive) or by its ID
    pub fn find(&self, identifier: &str) -> Result<Option<StashGoal>, EclosionError> {
        if let Ok(id) = StashGoalId::parse(identifier) {
            if let Some(goal) = self.get(id)? {
                return Ok(Some(goal));
            }
        }

        let goals = self.goals.read().map_err(lock_error)?;
        let needle = identifier.trim().to_lowercase();
        Ok(goals
            .values()
            .find(|g| g.name.to_lowercase() == needle)
            .cloned())
    }

    /// All goals in creation order
    pub fn list(&self) -> Result<Vec<StashGoal>, EclosionError> {
        let goals = self.goals.read().map_err(lock_error)?;
        let mut list: Vec<_> = goals.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    pub fn upsert(&self, goal: StashGoal) -> Result<(), EclosionError> {
        let mut goals = self.goals.write().map_err(lock_error)?;
        goals.insert(goal.id, goal);
        Ok(())
    }

    pub fn delete(&self, id: StashGoalId) -> Result<bool, EclosionError> {
        let mut goals = self.goals.write().map_err(lock_error)?;
        Ok(goals.remove(&id).is_some())
    }
}
