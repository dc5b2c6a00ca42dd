//! Event tags recognised in forwarder and consumer log records

use super::counters::Counter;
use super::line::{LineError, LogLine, FINALIZE_STATE_TOKEN, INGRESS_FACE_TOKEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTag {
    IncomingInterest,
    InterestFinalize,
    ContentStoreMiss,
    ContentStoreHit,
    OutgoingNack,
    IncomingData,
    OutgoingData,
    DataUnsolicited,
    ConsumerTimeout,
}

impl EventTag {
    pub const ALL: [EventTag; 9] = [
        EventTag::IncomingInterest,
        EventTag::InterestFinalize,
        EventTag::ContentStoreMiss,
        EventTag::ContentStoreHit,
        EventTag::OutgoingNack,
        EventTag::IncomingData,
        EventTag::OutgoingData,
        EventTag::DataUnsolicited,
        EventTag::ConsumerTimeout,
    ];

    /// `Component:function(` prefix the event field starts with
    pub fn prefix(self) -> &'static str {
        match self {
            EventTag::IncomingInterest => "Forwarder:onIncomingInterest(",
            EventTag::InterestFinalize => "Forwarder:onInterestFinalize(",
            EventTag::ContentStoreMiss => "Forwarder:onContentStoreMiss(",
            EventTag::ContentStoreHit => "Forwarder:onContentStoreHit(",
            EventTag::OutgoingNack => "Forwarder:onOutgoingNack(",
            EventTag::IncomingData => "Forwarder:onIncomingData(",
            EventTag::OutgoingData => "Forwarder:onOutgoingData(",
            EventTag::DataUnsolicited => "Forwarder:onDataUnsolicited(",
            EventTag::ConsumerTimeout => "Consumer:OnTimeout(",
        }
    }

    /// Matches the event token of a log line, ignoring its logging namespace
    pub fn from_event_field(field: &str) -> Option<Self> {
        let name = strip_component_namespace(field);
        Self::ALL
            .into_iter()
            .find(|tag| name.starts_with(tag.prefix()))
    }

    /// Counter this event increments, if any.
    ///
    /// Finalize records are split by their outcome word, and incoming Data
    /// only counts when the record names the ingress face.
    pub fn counter(self, line: &LogLine<'_>) -> Result<Option<Counter>, LineError> {
        let counter = match self {
            EventTag::IncomingInterest => Some(Counter::InInterests),
            EventTag::InterestFinalize => {
                let state = line.token(FINALIZE_STATE_TOKEN, "finalize state")?;
                if state.starts_with("satisfied") {
                    Some(Counter::SatisfiedInterests)
                } else if state.starts_with("unsatisfied") {
                    Some(Counter::UnsatisfiedInterests)
                } else {
                    None
                }
            }
            EventTag::ContentStoreMiss => Some(Counter::ContentStoreMisses),
            EventTag::ContentStoreHit => Some(Counter::ContentStoreHits),
            EventTag::OutgoingNack => Some(Counter::OutNacks),
            EventTag::IncomingData => {
                let face = line.token(INGRESS_FACE_TOKEN, "ingress face")?;
                face.starts_with("in=(").then_some(Counter::InDatas)
            }
            EventTag::OutgoingData => Some(Counter::OutDatas),
            EventTag::DataUnsolicited => Some(Counter::UnsolicitedDatas),
            EventTag::ConsumerTimeout => Some(Counter::TimeoutInterests),
        };
        Ok(counter)
    }
}

/// Drops the `ns3.`/`nfd.`/`ndn.` style namespace in front of `Component:`
pub fn strip_component_namespace(field: &str) -> &str {
    let component_end = field.find(':').unwrap_or(field.len());
    match field[..component_end].rfind('.') {
        Some(dot) => &field[dot + 1..],
        None => field,
    }
}
