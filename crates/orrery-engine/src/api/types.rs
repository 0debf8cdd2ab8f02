use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Index of a body in the registry. Stable for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Opaque reference to an object owned by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub u32);

/// Position plus Euler rotation (radians, XYZ order) of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self { position, rotation: Vec3::ZERO }
    }
}

/// A presentation event emitted by the orrery for the host UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrreryEvent {
    /// The simulation clock was paused or resumed.
    PauseChanged { paused: bool },
    /// Orbit guides were shown or hidden.
    OrbitsVisibilityChanged { visible: bool },
    /// A focus session started on a body.
    FocusStarted { body: BodyId },
    /// The camera reached a body and the info panel was shown.
    InfoShown { body: BodyId },
    /// A focus session ended and free control is back.
    FocusEnded,
}

impl OrreryEvent {
    pub const KIND_PAUSE: f32 = 1.0;
    pub const KIND_ORBITS: f32 = 2.0;
    pub const KIND_FOCUS_STARTED: f32 = 3.0;
    pub const KIND_INFO_SHOWN: f32 = 4.0;
    pub const KIND_FOCUS_ENDED: f32 = 5.0;

    /// Pack the event into its wire record.
    pub fn to_record(self) -> EventRecord {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        match self {
            OrreryEvent::PauseChanged { paused } => EventRecord::new(Self::KIND_PAUSE, flag(paused)),
            OrreryEvent::OrbitsVisibilityChanged { visible } => {
                EventRecord::new(Self::KIND_ORBITS, flag(visible))
            }
            OrreryEvent::FocusStarted { body } => {
                EventRecord::new(Self::KIND_FOCUS_STARTED, body.0 as f32)
            }
            OrreryEvent::InfoShown { body } => EventRecord::new(Self::KIND_INFO_SHOWN, body.0 as f32),
            OrreryEvent::FocusEnded => EventRecord::new(Self::KIND_FOCUS_ENDED, 0.0),
        }
    }
}

/// Flat event record read by the host from linear memory.
/// `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;

    fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, b: 0.0, c: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_pack_kind_and_payload() {
        let rec = OrreryEvent::PauseChanged { paused: true }.to_record();
        assert_eq!(rec.kind, OrreryEvent::KIND_PAUSE);
        assert_eq!(rec.a, 1.0);

        let rec = OrreryEvent::FocusStarted { body: BodyId(3) }.to_record();
        assert_eq!(rec.kind, OrreryEvent::KIND_FOCUS_STARTED);
        assert_eq!(rec.a, 3.0);
    }

    #[test]
    fn records_cast_to_flat_floats() {
        let recs = [
            OrreryEvent::FocusEnded.to_record(),
            OrreryEvent::OrbitsVisibilityChanged { visible: false }.to_record(),
        ];
        let floats: &[f32] = bytemuck::cast_slice(&recs);
        assert_eq!(floats.len(), 2 * EventRecord::FLOATS);
        assert_eq!(floats[0], OrreryEvent::KIND_FOCUS_ENDED);
        assert_eq!(floats[4], OrreryEvent::KIND_ORBITS);
    }
}
