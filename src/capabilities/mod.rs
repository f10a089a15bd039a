mod timer;

pub use self::timer::{Timer, TimerId, TimerOperation, TimerOutput};

// Crux's built-in Render capability and the crux_kv KeyValue capability
// (the browser local-storage equivalent) are used directly.
pub use crux_core::render::Render;
pub use crux_kv::KeyValue;

use crate::Event;

pub type AppRender = Render<Event>;
pub type AppKeyValue = KeyValue<Event>;
pub type AppTimer = Timer<Event>;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub key_value: KeyValue<Event>,
    pub timer: Timer<Event>,
}
