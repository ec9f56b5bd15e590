//! Recipient Filter
//!
//! Picks who hears an utterance from a snapshot of the location's contents.

use crate::domain::entities::Actor;

#[derive(Debug, Clone, Copy, Default)]
pub struct RecipientFilter;

impl RecipientFilter {
    pub fn new() -> Self {
        Self
    }

    /// Account-controlled actors on the speaker's plane, in contents order.
    ///
    /// The speaker is always included: at its own position if present in
    /// `contents`, otherwise last.
    pub fn filter(&self, contents: Vec<Actor>, speaker: &Actor) -> Vec<Actor> {
        let mut speaker_seen = false;
        let mut recipients: Vec<Actor> = contents
            .into_iter()
            .filter(|actor| {
                if actor.id == speaker.id {
                    if speaker_seen {
                        return false;
                    }
                    speaker_seen = true;
                    return true;
                }
                actor.has_account && actor.shares_plane(speaker)
            })
            .map(|actor| if actor.id == speaker.id { speaker.clone() } else { actor })
            .collect();

        if !speaker_seen {
            recipients.push(speaker.clone());
        }

        recipients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ActorId, Language, LocationId, Plane};

    fn room() -> LocationId {
        LocationId::new("#42")
    }

    fn ids(actors: &[Actor]) -> Vec<ActorId> {
        actors.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_same_plane_accounts_in_order() {
        let speaker = Actor::new("Ada", room());
        let bo = Actor::new("Bo", room());
        let chair = Actor::object("a chair", room());
        let ghost = Actor::new("Ghost", room()).with_plane(Plane::Shadow);
        let cy = Actor::new("Cy", room());

        let contents = vec![
            bo.clone(),
            chair,
            speaker.clone(),
            ghost,
            cy.clone(),
        ];
        let recipients = RecipientFilter::new().filter(contents, &speaker);
        assert_eq!(ids(&recipients), vec![bo.id, speaker.id, cy.id]);
    }

    #[test]
    fn test_cross_plane_excluded_regardless_of_capability() {
        let speaker = Actor::new("Shade", room()).with_plane(Plane::Shadow);
        let scholar = Actor::new("Scholar", room())
            .with_language(Language::new("French").unwrap())
            .with_capability("Universal Language");

        let recipients = RecipientFilter::new().filter(vec![speaker.clone(), scholar], &speaker);
        assert_eq!(ids(&recipients), vec![speaker.id]);
    }

    #[test]
    fn test_speaker_always_included() {
        let speaker = Actor::new("Puppet", room()).with_account(false);
        let bo = Actor::new("Bo", room());

        let recipients = RecipientFilter::new().filter(vec![speaker.clone(), bo.clone()], &speaker);
        assert_eq!(ids(&recipients), vec![speaker.id, bo.id]);

        let absent = RecipientFilter::new().filter(vec![bo.clone()], &speaker);
        assert_eq!(ids(&absent), vec![bo.id, speaker.id]);
    }

    #[test]
    fn test_speaker_snapshot_wins() {
        // The location may hold a stale copy of the speaker.
        let speaker = Actor::new("Ada", room()).with_plane(Plane::Shadow);
        let stale = speaker.clone().with_plane(Plane::Material);

        let recipients = RecipientFilter::new().filter(vec![stale], &speaker);
        assert_eq!(recipients.len(), 1);
        assert_eq!(recipients[0].plane, Plane::Shadow);
    }
}
