//! Broadcast Coordinator (Use Case)
//!
//! Delivers one utterance to everyone who can perceive it, rendered per
//! recipient.

use std::sync::Arc;

use crate::config::SpeechConfig;
use crate::domain::{
    Actor, BroadcastReport, CapabilityResolver, Delivery, DeliveryPlan, DomainError,
    FormatNormalizer, Garbler, LocationId, RecipientFilter, Segment, SegmentParser,
    SpeechRenderer, SpeechStyle, Utterance,
};
use crate::ports::{LocationContents, MessageSink, NoPoseBreak, PoseBreakHook};

/// Validated, parsed input with its recipient snapshot
struct Prepared {
    segments: Vec<Segment>,
    recipients: Vec<Actor>,
}

/// Application service that fans one utterance out to a location
pub struct BroadcastCoordinator<L: LocationContents, S: MessageSink, P: PoseBreakHook = NoPoseBreak> {
    world: Arc<L>,
    sink: Arc<S>,
    pose_break: Arc<P>,
    normalizer: FormatNormalizer,
    parser: SegmentParser,
    resolver: CapabilityResolver,
    renderer: SpeechRenderer,
    filter: RecipientFilter,
}

impl<L: LocationContents, S: MessageSink, P: PoseBreakHook> BroadcastCoordinator<L, S, P> {
    pub fn new(world: Arc<L>, sink: Arc<S>, pose_break: Arc<P>) -> Self {
        Self::build(world, sink, pose_break, &SpeechConfig::default())
    }

    /// Create a coordinator with custom speech settings
    pub fn with_config(
        world: Arc<L>,
        sink: Arc<S>,
        pose_break: Arc<P>,
        config: &SpeechConfig,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self::build(world, sink, pose_break, config))
    }

    fn build(world: Arc<L>, sink: Arc<S>, pose_break: Arc<P>, config: &SpeechConfig) -> Self {
        let normalizer = FormatNormalizer::new(config.escapes.clone());
        let garbler = Garbler::new(config.placeholder)
            .with_preserved(normalizer.replacements().map(str::to_string));

        Self {
            world,
            sink,
            pose_break,
            normalizer,
            parser: SegmentParser::new(),
            resolver: CapabilityResolver::new(config.universal_tokens.clone()),
            renderer: SpeechRenderer::new(garbler),
            filter: RecipientFilter::new(),
        }
    }

    /// Broadcast an utterance from `speaker` to `location`.
    ///
    /// Validation and parse failures return `Err` before anything is
    /// delivered. Once delivery starts, per-recipient sink errors are
    /// collected in the report and the fan-out continues.
    pub fn broadcast(
        &self,
        utterance: &Utterance,
        speaker: &Actor,
        location: &LocationId,
    ) -> Result<BroadcastReport, DomainError> {
        let prepared = self.prepare(utterance, speaker, location)?;

        self.pose_break.pose_break(speaker, location);

        let plan = self.compose(&prepared, speaker, utterance.style);

        let mut report = BroadcastReport::default();
        for (recipient, delivery) in prepared.recipients.iter().zip(plan.iter()) {
            report.attempted += 1;
            match self.sink.deliver(recipient, &delivery.text) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    let failure = if matches!(e, DomainError::DeliveryFailure { .. }) {
                        e
                    } else {
                        DomainError::delivery_failure(recipient.id, e.to_string())
                    };
                    tracing::warn!(
                        recipient = %recipient.name,
                        error = %failure,
                        "Delivery failed, continuing broadcast"
                    );
                    report.failures.push(failure);
                }
            }
        }

        tracing::info!(
            speaker = %speaker.name,
            location = %location,
            style = %utterance.style,
            recipients = report.attempted,
            failed = report.failures.len(),
            "Broadcast complete"
        );

        Ok(report)
    }

    /// Compute what each recipient would receive, without the pose break
    /// or any delivery
    pub fn plan(
        &self,
        utterance: &Utterance,
        speaker: &Actor,
        location: &LocationId,
    ) -> Result<DeliveryPlan, DomainError> {
        let prepared = self.prepare(utterance, speaker, location)?;
        Ok(self.compose(&prepared, speaker, utterance.style))
    }

    fn prepare(
        &self,
        utterance: &Utterance,
        speaker: &Actor,
        location: &LocationId,
    ) -> Result<Prepared, DomainError> {
        if utterance.is_blank() {
            return Err(DomainError::EmptyMessage);
        }

        let text = self.normalizer.normalize(&utterance.text);
        let segments = if self.world.is_out_of_character(location) {
            tracing::debug!(location = %location, "Out-of-character location, speech not gated");
            self.parser.parse_ungated(&text, utterance.forced_language)
        } else {
            self.parser.parse(
                &text,
                utterance.forced_language,
                speaker.speaking_language.as_ref(),
            )?
        };

        let contents = self.world.contents(location)?;
        let recipients = self.filter.filter(contents, speaker);

        Ok(Prepared {
            segments,
            recipients,
        })
    }

    fn compose(&self, prepared: &Prepared, speaker: &Actor, style: SpeechStyle) -> DeliveryPlan {
        let mut plan = DeliveryPlan::new();

        for recipient in &prepared.recipients {
            let body = self.renderer.compose(prepared.segments.iter().map(|segment| {
                let verdict = self.resolver.resolve(recipient, speaker, segment.language());
                (segment, verdict)
            }));
            let text = self
                .renderer
                .frame(style, &speaker.name, recipient.id == speaker.id, &body);

            plan.push(Delivery {
                recipient: recipient.id,
                recipient_name: recipient.name.clone(),
                text,
            });
        }

        plan
    }
}
