use std::rc::Rc;
use reviewwall::clock::FixedClock;
use reviewwall::scheduler::{ImmediateScheduler, ManualScheduler};
use reviewwall::services::Services;
use reviewwall::store::{MemoryStore, SchemaVersion};

/// 2026-10-18T12:00:00Z
pub const NOW: i64 = 1_792_324_800_000;

/// Services whose submissions complete as soon as they start.
pub fn instant(schema: SchemaVersion) -> (Services, MemoryStore) {
    let store = MemoryStore::new(schema);
    let services = Services::new(
        Rc::new(store.clone()),
        Rc::new(FixedClock::new(NOW)),
        Rc::new(ImmediateScheduler),
        7,
    );
    (services, store)
}

/// Services whose submissions wait until the returned scheduler runs them.
pub fn manual(schema: SchemaVersion) -> (Services, MemoryStore, Rc<ManualScheduler>) {
    let store = MemoryStore::new(schema);
    let scheduler = Rc::new(ManualScheduler::new());
    let services = Services::new(
        Rc::new(store.clone()),
        Rc::new(FixedClock::new(NOW)),
        scheduler.clone(),
        7,
    );
    (services, store, scheduler)
}
