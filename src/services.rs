//! Host capabilities the widget depends on, bundled so they can be swapped
//! for in-memory versions in tests.

use crate::clock::{Clock, SystemClock};
use crate::config::WidgetConfig;
use crate::scheduler::{Scheduler, TimeoutScheduler};
use crate::store::{LocalStorageStore, ReviewStore};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct Services {
    pub store: Rc<dyn ReviewStore>,
    /// Only consulted when legacy migration is enabled.
    pub legacy_store: Option<Rc<dyn ReviewStore>>,
    pub clock: Rc<dyn Clock>,
    pub scheduler: Rc<dyn Scheduler>,
    pub rng: Rc<RefCell<dyn RngCore>>,
}

impl Services {
    /// localStorage, wall clock and browser timers.
    pub fn browser(config: &WidgetConfig) -> Self {
        let clock = SystemClock;
        let legacy_store = config
            .legacy_schema()
            .map(|schema| Rc::new(LocalStorageStore::new(schema)) as Rc<dyn ReviewStore>);
        Self {
            store: Rc::new(LocalStorageStore::new(config.schema)),
            legacy_store,
            rng: Rc::new(RefCell::new(Pcg32::seed_from_u64(clock.now_millis() as u64))),
            clock: Rc::new(clock),
            scheduler: Rc::new(TimeoutScheduler),
        }
    }

    pub fn new(
        store: Rc<dyn ReviewStore>,
        clock: Rc<dyn Clock>,
        scheduler: Rc<dyn Scheduler>,
        seed: u64,
    ) -> Self {
        Self {
            store,
            legacy_store: None,
            clock,
            scheduler,
            rng: Rc::new(RefCell::new(Pcg32::seed_from_u64(seed))),
        }
    }

    pub fn with_legacy_store(mut self, legacy: Rc<dyn ReviewStore>) -> Self {
        self.legacy_store = Some(legacy);
        self
    }
}

