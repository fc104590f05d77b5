// src/store.rs
//
// Local persistence for the profile, journal and tarot history. A Store
// is an explicit repository handed to callers; records live as JSON files
// under fixed names with no schema migration. A record that fails to
// parse degrades to the empty default rather than poisoning the caller.

use crate::moon::MoonPhase;
use crate::tarot::TarotReading;
use crate::Result;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PROFILE_FILE: &str = "celestial-oracle-profile.json";
const JOURNAL_FILE: &str = "celestial-oracle-journal.json";
const READINGS_FILE: &str = "celestial-oracle-readings.json";

// ---------------------------
// ## Persisted Records
// ---------------------------

/// The single persisted entity driving chart and numerology computation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl UserProfile {
    /// A profile is usable for computation once it carries a birth date.
    pub fn has_birth_data(&self) -> bool {
        !self.birth_date.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: String,
    pub moon_phase: MoonPhase,
    pub content: String,
    pub intentions: Vec<String>,
    pub gratitude: Vec<String>,
}

// ---------------------------
// ## Store
// ---------------------------

pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open (creating if necessary) a store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!("store opened at {}", dir.display());
        Ok(Store { dir })
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_or<T: DeserializeOwned>(&self, file: &str, default: T) -> Result<T> {
        let path = self.path(file);
        if !path.exists() {
            return Ok(default);
        }
        let raw = fs::read_to_string(&path)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("discarding unreadable record {}: {e}", path.display());
                Ok(default)
            }
        }
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path(file), json)?;
        Ok(())
    }

    fn remove(&self, file: &str) -> Result<()> {
        let path = self.path(file);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    // ---------------------------
    // ## Profile
    // ---------------------------

    pub fn load_profile(&self) -> Result<Option<UserProfile>> {
        self.read_or(PROFILE_FILE, None)
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.write(PROFILE_FILE, profile)
    }

    pub fn clear_profile(&self) -> Result<()> {
        self.remove(PROFILE_FILE)
    }

    // ---------------------------
    // ## Journal
    // ---------------------------

    pub fn journal(&self) -> Result<Vec<JournalEntry>> {
        self.read_or(JOURNAL_FILE, Vec::new())
    }

    pub fn add_journal(&self, entry: JournalEntry) -> Result<()> {
        let mut entries = self.journal()?;
        entries.push(entry);
        self.write(JOURNAL_FILE, &entries)
    }

    pub fn remove_journal(&self, id: &str) -> Result<()> {
        let mut entries = self.journal()?;
        entries.retain(|entry| entry.id != id);
        self.write(JOURNAL_FILE, &entries)
    }

    // ---------------------------
    // ## Tarot History
    // ---------------------------

    pub fn readings(&self) -> Result<Vec<TarotReading>> {
        self.read_or(READINGS_FILE, Vec::new())
    }

    pub fn add_reading(&self, reading: TarotReading) -> Result<()> {
        let mut readings = self.readings()?;
        readings.push(reading);
        self.write(READINGS_FILE, &readings)
    }

    pub fn clear_readings(&self) -> Result<()> {
        self.remove(READINGS_FILE)
    }
}
