//! Actor - An entity that can speak or receive speech
//!
//! Owned by the world/session layer. The broadcast pipeline only reads
//! actor snapshots; the mutators here are for the world layer itself.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{
    ActorId, CapabilitySet, CapabilityToken, Language, LocationId, Plane,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    #[serde(default)]
    pub plane: Plane,
    /// Known languages, deduplicated case-insensitively
    #[serde(default)]
    pub languages: Vec<Language>,
    /// Language used for tagged speech, if any
    #[serde(default)]
    pub speaking_language: Option<Language>,
    /// Merits and exemptions
    #[serde(default)]
    pub capabilities: CapabilitySet,
    pub location: LocationId,
    /// Whether a live account/session controls this actor
    #[serde(default)]
    pub has_account: bool,
}

impl Actor {
    /// Create an account-controlled actor on the material plane
    pub fn new(name: impl Into<String>, location: LocationId) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            plane: Plane::Material,
            languages: Vec::new(),
            speaking_language: None,
            capabilities: CapabilitySet::new(),
            location,
            has_account: true,
        }
    }

    /// Create scenery or an NPC with no controlling account
    pub fn object(name: impl Into<String>, location: LocationId) -> Self {
        Self {
            has_account: false,
            ..Self::new(name, location)
        }
    }

    pub fn with_plane(mut self, plane: Plane) -> Self {
        self.plane = plane;
        self
    }

    /// Add a known language (ignored if already known)
    pub fn with_language(mut self, language: Language) -> Self {
        self.learn(language);
        self
    }

    pub fn with_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        for language in languages {
            self.learn(language);
        }
        self
    }

    /// Set the speaking language without checking it is known
    pub fn speaking(mut self, language: Language) -> Self {
        self.speaking_language = Some(language);
        self
    }

    pub fn with_capability(mut self, token: impl Into<CapabilityToken>) -> Self {
        self.capabilities.insert(token);
        self
    }

    pub fn with_account(mut self, has_account: bool) -> Self {
        self.has_account = has_account;
        self
    }

    /// Learn a language; returns false if it was already known
    pub fn learn(&mut self, language: Language) -> bool {
        if self.knows(&language) {
            return false;
        }
        self.languages.push(language);
        true
    }

    pub fn knows(&self, language: &Language) -> bool {
        self.languages.iter().any(|known| known == language)
    }

    pub fn holds(&self, token: &CapabilityToken) -> bool {
        self.capabilities.contains(token)
    }

    pub fn shares_plane(&self, other: &Actor) -> bool {
        self.plane == other.plane
    }

    /// Select the speaking language by name, or clear it with `None`.
    ///
    /// The stored value uses the actor's own spelling of the language.
    pub fn set_speaking_language(&mut self, name: Option<&str>) -> Result<(), DomainError> {
        let Some(name) = name else {
            self.speaking_language = None;
            return Ok(());
        };

        let wanted = Language::new(name)?;
        let known = self
            .languages
            .iter()
            .find(|known| **known == wanted)
            .cloned()
            .ok_or_else(|| DomainError::UnknownLanguage(name.trim().to_string()))?;

        self.speaking_language = Some(known);
        Ok(())
    }

    /// Step into the shadow plane. Returns false if already there.
    pub fn step_sideways(&mut self) -> bool {
        if self.plane == Plane::Shadow {
            return false;
        }
        self.plane = Plane::Shadow;
        true
    }

    /// Return to the material plane. Returns false if already there.
    pub fn return_to_material(&mut self) -> bool {
        if self.plane == Plane::Material {
            return false;
        }
        self.plane = Plane::Material;
        true
    }
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Actor {}
