//! Scene files
//!
//! A scene is one location and the actors in it, loaded from TOML:
//!
//! ```toml
//! [location]
//! id = "#12"
//! name = "The Rusty Anchor"
//! ooc = false
//!
//! [[actors]]
//! name = "Ada"
//! plane = "material"
//! languages = ["English", "French"]
//! speaking = "French"
//! merits = ["Universal Language"]
//! account = true
//! ```

use anyhow::{bail, Context, Result};
use parley::{Actor, DomainError, Language, LocationContents, LocationId, Plane};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SceneFile {
    location: LocationEntry,
    #[serde(default)]
    actors: Vec<ActorEntry>,
}

#[derive(Debug, Deserialize)]
struct LocationEntry {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    ooc: bool,
}

#[derive(Debug, Deserialize)]
struct ActorEntry {
    name: String,
    #[serde(default)]
    plane: Plane,
    #[serde(default)]
    languages: Vec<String>,
    #[serde(default)]
    speaking: Option<String>,
    #[serde(default)]
    merits: Vec<String>,
    #[serde(default = "default_account")]
    account: bool,
}

fn default_account() -> bool {
    true
}

/// A loaded scene; also serves as the location-contents provider
#[derive(Debug, Clone)]
pub struct Scene {
    pub location: LocationId,
    pub name: String,
    /// Out-of-character area: speech is not language-gated
    pub out_of_character: bool,
    pub actors: Vec<Actor>,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene from {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid scene file {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: SceneFile = toml::from_str(content).context("Failed to parse scene")?;

        let location = LocationId::new(file.location.id);
        let name = file.location.name.unwrap_or_else(|| location.to_string());
        let out_of_character = file.location.ooc;

        let mut actors: Vec<Actor> = Vec::with_capacity(file.actors.len());
        for entry in file.actors {
            if actors.iter().any(|a| a.name.eq_ignore_ascii_case(&entry.name)) {
                bail!("Duplicate actor name: {}", entry.name);
            }
            actors.push(entry.into_actor(&location)?);
        }

        Ok(Self {
            location,
            name,
            out_of_character,
            actors,
        })
    }

    /// Find an actor by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&Actor> {
        self.actors
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl ActorEntry {
    fn into_actor(self, location: &LocationId) -> Result<Actor> {
        let languages = self
            .languages
            .iter()
            .map(Language::new)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Bad language list for {}", self.name))?;

        let mut actor = Actor::new(self.name.clone(), location.clone())
            .with_plane(self.plane)
            .with_languages(languages)
            .with_account(self.account);
        for merit in self.merits {
            actor = actor.with_capability(merit);
        }

        actor
            .set_speaking_language(self.speaking.as_deref())
            .with_context(|| format!("Cannot set speaking language for {}", self.name))?;

        Ok(actor)
    }
}

impl LocationContents for Scene {
    fn contents(&self, location: &LocationId) -> Result<Vec<Actor>, DomainError> {
        if *location != self.location {
            return Err(DomainError::not_found("Location", location));
        }
        Ok(self.actors.clone())
    }

    fn is_out_of_character(&self, location: &LocationId) -> bool {
        self.out_of_character && *location == self.location
    }
}
