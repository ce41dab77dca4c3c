//! Configuration for a single divination.

use chrono::{Local, NaiveDateTime};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::hexagram::{Hexagram, generate_hexagram};

/// Configuration for casting one hexagram.
#[derive(Debug, Clone, Default)]
pub struct DivinationConfig {
    /// RNG seed for reproducible casts. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Fixed casting time. `None` uses the local clock.
    pub time: Option<NaiveDateTime>,
    /// The question being asked.
    pub topic: String,
}

impl DivinationConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the casting time.
    pub fn with_time(mut self, time: NaiveDateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// A fresh RNG for this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// The casting time, falling back to now.
    pub fn resolved_time(&self) -> NaiveDateTime {
        self.time.unwrap_or_else(|| Local::now().naive_local())
    }

    /// Cast a hexagram with this configuration.
    pub fn cast(&self) -> Hexagram {
        let mut rng = self.rng();
        generate_hexagram(self.topic.clone(), &mut rng, self.resolved_time())
    }
}
