use orrery_engine::{
    BodyCatalog, ConfigError, EventRecord, FixedTimestep, InfoPanel, InputEvent, InputQueue, Orrery,
    OrreryConfig, SceneRenderer,
};

/// Drives an `Orrery` from host animation frames.
///
/// The host calls `push_input` as events arrive and `tick` once per animation
/// frame with the wall-clock delta. Input is applied first, then as many fixed
/// steps as the delta covers, then one render. wasm-bindgen cannot export
/// generic structs, so `lib.rs` keeps a concrete runner in a `thread_local!`.
pub struct OrreryRunner<R: SceneRenderer, P: InfoPanel> {
    orrery: Orrery<R, P>,
    input: InputQueue,
    timestep: FixedTimestep,
    /// Events from the last tick, packed for linear-memory reads.
    event_buffer: Vec<EventRecord>,
}

impl<R: SceneRenderer, P: InfoPanel> OrreryRunner<R, P> {
    pub fn new(config: OrreryConfig, scene: R, panel: P) -> Result<Self, ConfigError> {
        let timestep = FixedTimestep::new(config.tick_ms);
        Ok(Self {
            orrery: Orrery::new(config, scene, panel)?,
            input: InputQueue::new(),
            timestep,
            event_buffer: Vec::with_capacity(16),
        })
    }

    /// Load the body catalog (JSON). Catalog settings may change the tick length.
    pub fn load_catalog(&mut self, json: &str) -> Result<usize, ConfigError> {
        let catalog = BodyCatalog::from_json(json)?;
        let count = self.orrery.load_catalog(catalog)?;
        self.timestep = FixedTimestep::new(self.orrery.config().tick_ms);
        log::info!("Catalog loaded: {count} bodies");
        Ok(count)
    }

    /// Load the built-in nine-body catalog.
    pub fn load_builtin(&mut self) -> Result<usize, ConfigError> {
        let count = self.orrery.load_catalog(BodyCatalog::builtin()?)?;
        self.timestep = FixedTimestep::new(self.orrery.config().tick_ms);
        Ok(count)
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Decode and queue a UI event. Unknown kinds are dropped with a warning.
    pub fn push_custom(&mut self, kind: u32, a: f32, b: f32, c: f32) {
        match InputEvent::from_custom(kind, a, b, c) {
            Some(event) => self.input.push(event),
            None => log::warn!("unknown custom event kind {kind}"),
        }
    }

    /// Run one host frame. Returns the number of fixed steps taken.
    pub fn tick(&mut self, frame_ms: f64) -> u32 {
        for event in self.input.drain() {
            self.orrery.handle_input(event);
        }

        let steps = self.timestep.accumulate(frame_ms);
        for _ in 0..steps {
            self.orrery.step();
        }
        self.orrery.render();

        self.event_buffer.clear();
        self.event_buffer
            .extend(self.orrery.drain_events().into_iter().map(|e| e.to_record()));
        steps
    }

    pub fn orrery(&self) -> &Orrery<R, P> {
        &self.orrery
    }

    // ---- Pointer accessors for linear-memory reads ----

    pub fn events_ptr(&self) -> *const f32 {
        self.event_floats().as_ptr()
    }

    /// Number of events (each `EventRecord::FLOATS` floats).
    pub fn events_len(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    pub fn event_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.event_buffer)
    }

    /// Camera view-projection (16 floats) followed by the eye position (4).
    pub fn camera_floats(&self) -> Vec<f32> {
        let uniform = self.orrery.camera().uniform();
        bytemuck::cast_slice(&[uniform]).to_vec()
    }
}
